//! Integration tests for concurrent action invocations

mod common;

use action_bridge::{build_action, BridgeCollaborators, Capability, Memory, Outcome};
use common::*;
use serde_json::json;
use std::collections::HashSet;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_invocations_are_independent() {
    let capability = Arc::new(
        MockCapability::succeeding("stake", "stake {{amount}}", json!({"txId": "abc"}))
            .with_delay(Duration::from_millis(50)),
    );
    let source = Arc::new(MockSource::new(vec![capability.clone() as Arc<dyn Capability>]));
    let observer = Arc::new(RecordingObserver::default());
    let collaborators = BridgeCollaborators::new(
        source.clone(),
        Arc::new(MockModel::new(json!({"amount": 10}), "Staked.")),
    )
    .with_observer(observer.clone());

    let action = build_action(capability.clone(), &collaborators);
    let runtime = MockRuntime::new();

    let mut captured = Vec::new();
    let mut invocations = Vec::new();
    for i in 0..8 {
        let (responses, callback) = capture();
        captured.push(responses);
        let message = Memory::new(format!("stake {}", i));
        let action = &action;
        let runtime = &runtime;
        invocations.push(async move {
            action.handle(runtime, &message, None, None, Some(callback)).await
        });
    }

    let start = Instant::now();
    let results = futures::future::join_all(invocations).await;
    let elapsed = start.elapsed();

    // executions overlap instead of running back to back
    assert!(elapsed < Duration::from_millis(400), "Too slow: {:?}", elapsed);

    assert!(results.iter().all(|ok| *ok));
    for responses in &captured {
        let responses = responses.lock().unwrap();
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].content, json!({"txId": "abc"}));
    }

    assert_eq!(capability.execution_count(), 8);
    assert_eq!(source.clients.load(Ordering::SeqCst), 8);

    let completions = observer.completions.lock().unwrap();
    let ids: HashSet<_> = completions.iter().map(|(_, id, _)| *id).collect();
    assert_eq!(ids.len(), 8);
    assert!(completions.iter().all(|(_, _, outcome)| *outcome == Outcome::Success));
}

#[tokio::test]
async fn test_failure_in_one_invocation_does_not_affect_others() {
    let good = Arc::new(MockCapability::succeeding("supply", "", json!({"supplied": true})));
    let bad = Arc::new(MockCapability::rejecting("withdraw", "", "position locked"));
    let source = Arc::new(MockSource::new(vec![
        good.clone() as Arc<dyn Capability>,
        bad.clone() as Arc<dyn Capability>,
    ]));
    let collaborators =
        BridgeCollaborators::new(source, Arc::new(MockModel::new(json!({}), "Supplied.")));

    let supply = build_action(good.clone(), &collaborators);
    let withdraw = build_action(bad.clone(), &collaborators);
    let runtime = MockRuntime::new();

    let (good_responses, good_callback) = capture();
    let (bad_responses, bad_callback) = capture();
    let supply_message = Memory::new("supply");
    let withdraw_message = Memory::new("withdraw");

    let (supplied, withdrawn) = futures::future::join(
        supply.handle(&runtime, &supply_message, None, None, Some(good_callback)),
        withdraw.handle(&runtime, &withdraw_message, None, None, Some(bad_callback)),
    )
    .await;

    assert!(supplied);
    assert!(!withdrawn);
    assert_eq!(good_responses.lock().unwrap()[0].content, json!({"supplied": true}));
    assert_eq!(
        bad_responses.lock().unwrap()[0].text,
        "Error executing action withdraw: position locked"
    );
}
