//! Integration tests against a real Docker daemon.
//!
//! These tests require a running local Docker daemon and only perform
//! non-destructive operations (listings and smolder runs).
//! Run with: cargo test --test daemon_integration -- --ignored

use bonfire::burn::{process, ResourceKind, RunConfig};
use bonfire::engine::{ContainerEngine, DockerEngine};

fn create_test_engine() -> DockerEngine {
    DockerEngine::connect().expect("Docker daemon must be running for integration tests")
}

#[tokio::test]
#[ignore] // Run with: cargo test --test daemon_integration -- --ignored
async fn test_listings_answer() {
    let engine = create_test_engine();

    let images = engine.list_images(true).await;
    assert!(images.is_ok(), "Image listing failed: {:?}", images.err());

    let containers = engine.list_containers().await;
    assert!(
        containers.is_ok(),
        "Container listing failed: {:?}",
        containers.err()
    );

    let networks = engine.list_networks().await;
    assert!(
        networks.is_ok(),
        "Network listing failed: {:?}",
        networks.err()
    );
    let networks = networks.expect("Should have networks");
    assert!(
        networks.iter().any(|n| n.name == "bridge"),
        "Docker should always report the bridge network"
    );

    let volumes = engine.list_volumes().await;
    assert!(volumes.is_ok(), "Volume listing failed: {:?}", volumes.err());
}

#[tokio::test]
#[ignore]
async fn test_dangling_listing_is_subset_of_full_listing() {
    let engine = create_test_engine();

    let all = engine.list_images(true).await.expect("Should list images");
    let dangling = engine
        .list_images(false)
        .await
        .expect("Should list dangling images");

    assert!(dangling.len() <= all.len());
    for image in &dangling {
        assert!(
            all.iter().any(|i| i.id == image.id),
            "Dangling image {} missing from full listing",
            image.short_id()
        );
    }
}

#[tokio::test]
#[ignore]
async fn test_smolder_counts_match_listings_and_remove_nothing() {
    let engine = create_test_engine();

    let images_before = engine.list_images(true).await.expect("Should list images");
    let volumes_before = engine.list_volumes().await.expect("Should list volumes");

    let config = RunConfig {
        all: true,
        smolder: true,
        ..Default::default()
    };
    let metrics = process(&engine, config).await.expect("Smolder should succeed");

    assert_eq!(metrics.get(ResourceKind::Image), images_before.len() as u64);
    assert_eq!(metrics.get(ResourceKind::Volume), volumes_before.len() as u64);

    // Nothing was touched.
    let images_after = engine.list_images(true).await.expect("Should list images");
    let volumes_after = engine.list_volumes().await.expect("Should list volumes");
    assert_eq!(images_before.len(), images_after.len());
    assert_eq!(volumes_before.len(), volumes_after.len());
}
