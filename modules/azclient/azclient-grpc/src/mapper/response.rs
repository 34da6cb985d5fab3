//! Response-side mapping.
//!
//! Absent optional wire fields decode to `None`, with one exception kept for
//! protocol compatibility: `request_id` on responses and evaluation responses
//! decodes to `Some("")` when the PDP omits it.

use azclient_sdk::{AuthorizationResponse, ContextResponse, EvaluationResponse, ReasonResponse};

use crate::proto;

#[must_use]
pub fn reason_to_wire(reason: Option<&ReasonResponse>) -> Option<proto::ReasonResponse> {
    reason.map(|r| proto::ReasonResponse {
        code: r.code.clone(),
        message: r.message.clone(),
    })
}

#[must_use]
pub fn reason_from_wire(reason: Option<&proto::ReasonResponse>) -> Option<ReasonResponse> {
    reason.map(|r| ReasonResponse {
        code: r.code.clone(),
        message: r.message.clone(),
    })
}

#[must_use]
pub fn context_response_to_wire(
    context: Option<&ContextResponse>,
) -> Option<proto::ContextResponse> {
    context.map(|c| proto::ContextResponse {
        id: c.id.clone(),
        reason_admin: reason_to_wire(c.reason_admin.as_ref()),
        reason_user: reason_to_wire(c.reason_user.as_ref()),
    })
}

#[must_use]
pub fn context_response_from_wire(
    context: Option<&proto::ContextResponse>,
) -> Option<ContextResponse> {
    context.map(|c| ContextResponse {
        id: c.id.clone(),
        reason_admin: reason_from_wire(c.reason_admin.as_ref()),
        reason_user: reason_from_wire(c.reason_user.as_ref()),
    })
}

fn encode_evaluation_response(e: &EvaluationResponse) -> proto::EvaluationResponse {
    proto::EvaluationResponse {
        request_id: e.request_id.clone(),
        decision: e.decision,
        context: context_response_to_wire(e.context.as_ref()),
    }
}

fn decode_evaluation_response(e: &proto::EvaluationResponse) -> EvaluationResponse {
    EvaluationResponse {
        request_id: Some(e.request_id.clone().unwrap_or_default()),
        decision: e.decision,
        context: context_response_from_wire(e.context.as_ref()),
    }
}

#[must_use]
pub fn evaluation_response_to_wire(
    evaluation: Option<&EvaluationResponse>,
) -> Option<proto::EvaluationResponse> {
    evaluation.map(encode_evaluation_response)
}

#[must_use]
pub fn evaluation_response_from_wire(
    evaluation: Option<&proto::EvaluationResponse>,
) -> Option<EvaluationResponse> {
    evaluation.map(decode_evaluation_response)
}

#[must_use]
pub fn response_to_wire(response: &AuthorizationResponse) -> proto::AuthorizationCheckResponse {
    proto::AuthorizationCheckResponse {
        request_id: response.request_id.clone(),
        decision: response.decision,
        context: context_response_to_wire(response.context.as_ref()),
        evaluations: response
            .evaluations
            .iter()
            .map(encode_evaluation_response)
            .collect(),
    }
}

/// Decodes a PDP response; evaluation responses keep the PDP's order, which
/// mirrors the order of the submitted evaluations.
#[must_use]
pub fn response_from_wire(response: &proto::AuthorizationCheckResponse) -> AuthorizationResponse {
    AuthorizationResponse {
        request_id: Some(response.request_id.clone().unwrap_or_default()),
        decision: response.decision,
        context: context_response_from_wire(response.context.as_ref()),
        evaluations: response
            .evaluations
            .iter()
            .map(decode_evaluation_response)
            .collect(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn reason(code: &str, message: &str) -> proto::ReasonResponse {
        proto::ReasonResponse {
            code: Some(code.to_owned()),
            message: Some(message.to_owned()),
        }
    }

    #[test]
    fn absent_messages_map_to_absent_values() {
        assert!(reason_to_wire(None).is_none());
        assert!(reason_from_wire(None).is_none());
        assert!(context_response_to_wire(None).is_none());
        assert!(context_response_from_wire(None).is_none());
        assert!(evaluation_response_to_wire(None).is_none());
        assert!(evaluation_response_from_wire(None).is_none());
    }

    #[test]
    fn missing_request_id_decodes_to_empty_string() {
        let wire = proto::AuthorizationCheckResponse {
            decision: true,
            evaluations: vec![proto::EvaluationResponse::default()],
            ..proto::AuthorizationCheckResponse::default()
        };

        let response = response_from_wire(&wire);

        assert_eq!(response.request_id.as_deref(), Some(""));
        assert_eq!(response.evaluations[0].request_id.as_deref(), Some(""));
        // Every other optional field stays absent.
        assert!(response.context.is_none());
        assert!(response.evaluations[0].decision.is_none());
        assert!(response.evaluations[0].context.is_none());
    }

    #[test]
    fn reasons_decode_independently() {
        let wire = proto::AuthorizationCheckResponse {
            request_id: Some("1234".to_owned()),
            decision: false,
            context: Some(proto::ContextResponse {
                id: Some("ctx-1".to_owned()),
                reason_admin: Some(reason("403", "policy forbids create")),
                reason_user: None,
            }),
            evaluations: vec![],
        };

        let response = response_from_wire(&wire);
        let context = response.context.unwrap();

        assert_eq!(response.request_id.as_deref(), Some("1234"));
        assert!(!response.decision);
        assert_eq!(context.id.as_deref(), Some("ctx-1"));
        assert_eq!(
            context.reason_admin.unwrap().message.as_deref(),
            Some("policy forbids create")
        );
        assert!(context.reason_user.is_none());
    }

    #[test]
    fn evaluation_responses_keep_position() {
        let decisions = [Some(true), Some(false), None, Some(true)];
        let wire = proto::AuthorizationCheckResponse {
            decision: false,
            evaluations: decisions
                .iter()
                .enumerate()
                .map(|(i, decision)| proto::EvaluationResponse {
                    request_id: Some(format!("e{i}")),
                    decision: *decision,
                    context: None,
                })
                .collect(),
            ..proto::AuthorizationCheckResponse::default()
        };

        let response = response_from_wire(&wire);
        let decoded: Vec<_> = response
            .evaluations
            .iter()
            .map(|e| (e.request_id.clone().unwrap(), e.decision))
            .collect();

        assert_eq!(
            decoded,
            vec![
                ("e0".to_owned(), Some(true)),
                ("e1".to_owned(), Some(false)),
                ("e2".to_owned(), None),
                ("e3".to_owned(), Some(true)),
            ]
        );
    }

    #[test]
    fn encode_then_decode_preserves_present_fields() {
        let response = AuthorizationResponse {
            request_id: Some("1234".to_owned()),
            decision: true,
            context: Some(ContextResponse {
                id: None,
                reason_admin: None,
                reason_user: Some(ReasonResponse {
                    code: Some("200".to_owned()),
                    message: None,
                }),
            }),
            evaluations: vec![EvaluationResponse {
                request_id: Some("e1".to_owned()),
                decision: Some(true),
                context: None,
            }],
        };

        assert_eq!(response_from_wire(&response_to_wire(&response)), response);
    }
}
