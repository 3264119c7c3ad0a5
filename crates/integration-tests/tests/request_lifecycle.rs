use std::collections::HashSet;

use integration_tests::{memory_app, request_form};
use ll_core::filter::{filter_by_service_type, request_filters, ServiceFilter};
use ll_core::models::{AnswerPolicy, NewServiceRequest, RequestId, RequestStatus};
use ll_core::traits::RequestRepo;
use ll_services::forms::MISSING_UNLISTED_FIELDS;
use ll_services::UnlistedRequestForm;

#[test]
fn submitted_request_lands_pending_unassigned_at_the_head() {
    let (app, store, _) = memory_app(AnswerPolicy::Manual);
    app.requests.submit(&request_form("Electrical", "old fan", "555-1111")).unwrap();

    let request = app
        .requests
        .submit(&request_form("Plumbing", "leaky pipe", "555-0000"))
        .unwrap();

    let all = store.list_requests();
    assert_eq!(all[0], request);
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.provider, None);

    let plumbing = filter_by_service_type(&all, "Plumbing");
    assert!(plumbing.iter().any(|r| r.id == request.id));
    let electrical = filter_by_service_type(&all, "Electrical");
    assert!(electrical.iter().all(|r| r.id != request.id));
    assert_eq!(electrical.len(), 1);
}

#[test]
fn ids_stay_unique_for_a_session() {
    let (_, store, _) = memory_app(AnswerPolicy::Manual);
    let mut seen = HashSet::new();
    for i in 0..1_000 {
        let request = store.add_request(NewServiceRequest::new("Cleaning", format!("job {i}"), "555"));
        assert!(seen.insert(request.id), "duplicate id {}", request.id);
    }
}

#[test]
fn admin_toggles_status_back_and_forth() {
    let (app, store, _) = memory_app(AnswerPolicy::Manual);
    let request = app.requests.submit(&request_form("Cleaning", "move-out", "555-7890")).unwrap();

    assert_eq!(app.requests.toggle_status(request.id), Some(RequestStatus::Done));
    assert_eq!(app.requests.toggle_status(request.id), Some(RequestStatus::Pending));

    let snapshot = store.list_requests();
    assert_eq!(app.requests.toggle_status(RequestId::new()), None);
    assert_eq!(store.list_requests(), snapshot);
}

#[test]
fn unlisted_flow_is_filtered_under_its_own_label() {
    let (app, _, _) = memory_app(AnswerPolicy::Manual);
    let form = UnlistedRequestForm {
        title: "Sofa moving".into(),
        description: "Need help moving a heavy sofa this Saturday.".into(),
        phone: "555-5678".into(),
        location: None,
    };
    let request = app.requests.submit_unlisted(&form).unwrap();
    app.requests.submit(&request_form("Plumbing", "tap", "1")).unwrap();

    let unlisted = app.requests.dashboard(&ServiceFilter::from("Unlisted"));
    assert_eq!(unlisted.len(), 1);
    assert_eq!(unlisted[0].id, request.id);
    assert!(request_filters().contains(&"Unlisted".to_string()));

    let rejected = app
        .requests
        .submit_unlisted(&UnlistedRequestForm { phone: String::new(), ..form })
        .unwrap_err();
    assert_eq!(rejected.user_message(), MISSING_UNLISTED_FIELDS);
    assert_eq!(app.requests.dashboard(&ServiceFilter::All).len(), 2);
}

#[test]
fn all_filter_returns_the_whole_list_unchanged() {
    let (app, store, _) = memory_app(AnswerPolicy::Manual);
    for service_type in ["Plumbing", "CCTV", "Catering", "Plumbing"] {
        app.requests.submit(&request_form(service_type, "job", "555")).unwrap();
    }
    let all = store.list_requests();
    assert_eq!(filter_by_service_type(&all, "All"), all);
    assert_eq!(app.requests.dashboard(&ServiceFilter::All), all);
}

#[test]
fn requests_serialize_for_renderers() {
    let (app, _, _) = memory_app(AnswerPolicy::Manual);
    let request = app.requests.submit(&request_form("Painting", "two rooms", "555")).unwrap();

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["status"], "Pending");
    assert_eq!(json["provider"], serde_json::Value::Null);
    assert_eq!(json["location"]["pincode"], "500033");
}
