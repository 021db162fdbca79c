use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::config::FormsConfig;
use crate::forms::domain::FormKind;
use crate::forms::gateway::IntakeGateway;
use crate::forms::registry::{FormId, FormRegistry};
use crate::forms::submission::{FormPhase, SubmitOutcome};

fn registry_with_ttl(ttl: Duration) -> (FormRegistry, Arc<StubGateway>) {
    let gateway = Arc::new(StubGateway::default());
    let config = FormsConfig {
        instance_ttl: ttl,
        ..FormsConfig::default()
    };
    let shared: Arc<dyn IntakeGateway> = gateway.clone();
    (FormRegistry::new(shared, config), gateway)
}

fn capped_registry(max_instances: usize, gateway: Arc<dyn IntakeGateway>) -> FormRegistry {
    let config = FormsConfig {
        max_instances,
        ..FormsConfig::default()
    };
    FormRegistry::new(gateway, config)
}

#[tokio::test]
async fn resolve_returns_the_posted_instance() {
    let (registry, _) = registry_with_ttl(Duration::from_secs(60));
    let (id, controller) = registry.open(FormKind::Contact);

    let raw = id.to_string();
    let (resolved_id, resolved) = registry.resolve(Some(raw.as_str()), FormKind::Contact);

    assert_eq!(resolved_id, id);
    assert!(Arc::ptr_eq(&controller, &resolved));
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn unknown_or_mismatched_ids_open_a_fresh_instance() {
    let (registry, _) = registry_with_ttl(Duration::from_secs(60));
    let (contact_id, _) = registry.open(FormKind::Contact);

    let (garbage_id, _) = registry.resolve(Some("not-a-uuid"), FormKind::Contact);
    assert_ne!(garbage_id, contact_id);

    let raw = contact_id.to_string();
    let (other_id, other) = registry.resolve(Some(raw.as_str()), FormKind::Application);
    assert_ne!(other_id, contact_id);
    assert_eq!(other.kind(), FormKind::Application);

    let (fresh_id, _) = registry.resolve(None, FormKind::Contact);
    assert_ne!(fresh_id, contact_id);
    assert_eq!(registry.len(), 4);
}

#[tokio::test]
async fn page_views_store_nothing() {
    let (registry, _) = registry_with_ttl(Duration::from_secs(60));

    for _ in 0..100 {
        let (_, controller) = registry.peek(None, FormKind::Contact);
        assert!(controller.is_none());
    }
    let unknown_id = FormId::generate().to_string();
    let (_, unknown) = registry.peek(Some(unknown_id.as_str()), FormKind::Contact);

    assert!(unknown.is_none());
    assert!(registry.is_empty());
}

#[tokio::test]
async fn rendered_id_is_claimed_by_its_first_post() {
    let (registry, _) = registry_with_ttl(Duration::from_secs(60));
    let (rendered, _) = registry.peek(None, FormKind::Application);

    let raw = rendered.to_string();
    let (posted_id, controller) = registry.resolve(Some(raw.as_str()), FormKind::Application);
    assert_eq!(posted_id, rendered);

    let (viewed_id, viewed) = registry.peek(Some(raw.as_str()), FormKind::Application);
    assert_eq!(viewed_id, rendered);
    assert!(viewed.is_some_and(|viewed| Arc::ptr_eq(&viewed, &controller)));
    assert_eq!(registry.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn least_recently_used_instance_makes_room_at_the_cap() {
    let registry = capped_registry(2, Arc::new(StubGateway::default()));
    let (first, _) = registry.open(FormKind::Contact);
    tokio::time::advance(Duration::from_secs(1)).await;
    let (second, _) = registry.open(FormKind::Contact);
    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(registry.find(&first).is_some());
    tokio::time::advance(Duration::from_secs(1)).await;

    let (third, _) = registry.open(FormKind::Contact);

    assert_eq!(registry.len(), 2);
    assert!(registry.find(&first).is_some());
    assert!(registry.find(&second).is_none());
    assert!(registry.find(&third).is_some());
}

#[tokio::test]
async fn in_flight_instances_survive_the_cap() {
    let gateway = Arc::new(GatedGateway::default());
    let registry = capped_registry(1, gateway.clone());
    let (busy_id, busy) = registry.open(FormKind::Contact);

    let pending = {
        let busy = Arc::clone(&busy);
        tokio::spawn(async move { busy.submit(contact_values()).await })
    };
    while busy.phase() != FormPhase::Submitting {
        tokio::task::yield_now().await;
    }

    let (other_id, _) = registry.open(FormKind::Contact);
    assert_eq!(registry.len(), 2);
    assert!(registry.find(&busy_id).is_some());

    gateway.release.notify_one();
    assert_eq!(pending.await.expect("submit completes"), SubmitOutcome::Delivered);

    registry.open(FormKind::Contact);
    assert_eq!(registry.len(), 1);
    assert!(registry.find(&busy_id).is_none());
    assert!(registry.find(&other_id).is_none());
}

#[tokio::test]
async fn repeated_posts_share_one_delivery() {
    let (registry, gateway) = registry_with_ttl(Duration::from_secs(60));
    let (id, controller) = registry.open(FormKind::Contact);
    assert_eq!(controller.submit(contact_values()).await, SubmitOutcome::Delivered);

    let raw = id.to_string();
    let (_, again) = registry.resolve(Some(raw.as_str()), FormKind::Contact);
    assert_eq!(again.submit(contact_values()).await, SubmitOutcome::AlreadySubmitted);
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn idle_instances_expire_after_the_ttl() {
    let (registry, _) = registry_with_ttl(Duration::from_secs(60));
    let (stale, _) = registry.open(FormKind::Contact);

    tokio::time::advance(Duration::from_secs(61)).await;
    let (_, fresh) = registry.open(FormKind::Contact);

    assert_eq!(registry.len(), 1);
    assert!(registry.get(&stale, FormKind::Contact).is_none());
    assert_eq!(fresh.phase(), FormPhase::Idle);
}

#[test]
fn form_ids_parse_their_display_form() {
    let id = FormId::generate();
    assert_eq!(FormId::parse(&format!(" {id} ")), Some(id));
    assert_eq!(FormId::parse(""), None);
}
