// SPDX-License-Identifier: MPL-2.0
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use iced_core::Color;
use overlay_container::config::{self, Config};
use overlay_container::configuration::{
    ContainerBackgroundStyle, ContainerConfiguration, ContainerViewConfiguration, DisplayType,
    Material, QueueType,
};
use overlay_container::container::{
    ContainerEvent, ContainerManager, ContainerQueue, ContainerView, PresentationBinding,
    PresentedView, ViewPayload,
};
use overlay_container::diagnostics::{DiagnosticsHandle, LogType, MemoryLogger};
use overlay_container::domain::container::{ChannelCapacity, CleanupDelay, ViewId};
use overlay_container::domain::diagnostics::DebugLevel;
use tempfile::tempdir;

fn manager_with_memory_log() -> (ContainerManager, MemoryLogger) {
    let logger = MemoryLogger::new(64);
    let manager = ContainerManager::with_diagnostics(
        DiagnosticsHandle::new(logger.clone()),
        ChannelCapacity::default(),
    );
    (manager, logger)
}

fn red() -> ContainerBackgroundStyle {
    ContainerBackgroundStyle::Color(Color::from_rgb(1.0, 0.0, 0.0))
}

fn blue() -> ContainerBackgroundStyle {
    ContainerBackgroundStyle::Color(Color::from_rgb(0.0, 0.0, 1.0))
}

struct Banner {
    title: &'static str,
}

impl ContainerView for Banner {
    fn configuration(&self) -> ContainerViewConfiguration {
        ContainerViewConfiguration::new()
            .with_background(ContainerBackgroundStyle::Blur(Material::Thin))
            .with_auto_dismiss(Duration::from_secs(3))
    }
}

#[test]
fn reregistered_container_leaves_old_channel_inert() {
    let (manager, logger) = manager_with_memory_log();
    let mut first = manager.register_container("sheet");
    let mut second = manager.register_container("sheet");

    assert_eq!(manager.container_count(), 1);
    assert_eq!(logger.count_of(LogType::Warning), 1);

    manager.show("after", "sheet", ContainerViewConfiguration::default());

    assert!(first.try_next().is_none());
    assert!(first.is_terminated());
    assert!(second.try_next().is_some());
}

#[test]
fn show_into_unknown_container_logs_exactly_once() {
    let (manager, logger) = manager_with_memory_log();
    let mut other = manager.register_container("toasts");

    let id = manager.show("lost", "missing", ContainerViewConfiguration::default());

    assert!(id.is_none());
    assert_eq!(logger.len(), 1);
    assert_eq!(logger.count_of(LogType::Error), 1);
    assert!(logger.records()[0].message.contains("missing"));
    assert!(other.try_next().is_none());
    assert_eq!(manager.container_count(), 1);
}

#[test]
fn background_merge_table() {
    let blur = ContainerBackgroundStyle::Blur(Material::Regular);
    let containers = [None, Some(red()), Some(blur.clone())];
    let views = [None, Some(blue()), Some(blur)];

    for container in &containers {
        for view in &views {
            let stacking = ContainerBackgroundStyle::merge(
                container.as_ref(),
                view.as_ref(),
                DisplayType::Stacking,
            );
            let expected_stacking = view
                .clone()
                .or_else(|| container.clone())
                .unwrap_or(ContainerBackgroundStyle::Disabled);
            assert_eq!(stacking, expected_stacking, "{container:?} / {view:?}");

            let horizontal = ContainerBackgroundStyle::merge(
                container.as_ref(),
                view.as_ref(),
                DisplayType::Horizontal,
            );
            let expected_horizontal = container.clone().unwrap_or(ContainerBackgroundStyle::Disabled);
            assert_eq!(horizontal, expected_horizontal, "{container:?} / {view:?}");
        }
    }
}

#[test]
fn binding_toggle_round_trips_through_queue() {
    let manager = ContainerManager::new();
    let mut subscription = manager.register_container("sheet");
    let mut queue = ContainerQueue::new(ContainerConfiguration::default())
        .with_cleanup_delay(CleanupDelay::from_millis(0));
    let binding = PresentationBinding::new(false);
    let mut driver = PresentedView::new(
        "sheet",
        ViewPayload::new("settings"),
        ContainerViewConfiguration::default(),
        binding.clone(),
    );
    let start = Instant::now();

    driver.set_presented(true, &manager);
    let first = driver.current_id();
    queue.pump(&mut subscription, start);
    assert_eq!(queue.visible_count(), 1);

    driver.set_presented(false, &manager);
    queue.pump(&mut subscription, start);
    queue.tick(start);
    assert!(queue.is_empty());

    driver.set_presented(true, &manager);
    let second = driver.current_id();
    queue.pump(&mut subscription, start);

    assert!(first.is_some() && second.is_some());
    assert_ne!(first, second);
    assert!(binding.get());
    assert_eq!(queue.visible_count(), 1);
}

#[test]
fn host_can_present_again_after_container_side_dismissal() {
    let manager = ContainerManager::new();
    let mut subscription = manager.register_container("sheet");
    let mut queue = ContainerQueue::new(ContainerConfiguration::default());
    let binding = PresentationBinding::new(false);
    let mut driver = PresentedView::new(
        "sheet",
        ViewPayload::new("settings"),
        ContainerViewConfiguration::default(),
        binding.clone(),
    );
    let start = Instant::now();

    binding.set(true);
    driver.update(&manager);
    let first = driver.current_id().expect("container registered");
    queue.pump(&mut subscription, start);

    // Someone else clears the container, which resets the binding.
    manager.dismiss_all_views(&["sheet"], true);
    queue.pump(&mut subscription, start);
    let deadline = queue.next_deadline().expect("cleanup pending");
    queue.tick(deadline);
    assert!(!binding.get());

    // The host presents again and only polls afterwards.
    binding.set(true);
    driver.update(&manager);
    let second = driver.current_id().expect("fresh view shown");
    assert_ne!(first, second);

    queue.pump(&mut subscription, deadline);
    assert!(queue.is_visible(second));
    assert!(!queue.is_visible(first));
    assert_eq!(queue.visible_count(), 1);
}

#[test]
fn dismissing_twice_or_unknown_is_noop() {
    let manager = ContainerManager::new();
    let mut subscription = manager.register_container("toasts");
    let mut queue = ContainerQueue::new(ContainerConfiguration::default());
    let now = Instant::now();

    let id = manager
        .show("toast", "toasts", ContainerViewConfiguration::default())
        .expect("container registered");
    manager.dismiss(id, "toasts", true);
    manager.dismiss(id, "toasts", true);
    manager.dismiss(ViewId::new(), "toasts", true);
    queue.pump(&mut subscription, now);

    assert_eq!(queue.visible_count(), 0);
    assert_eq!(queue.dismissing_count(), 1);
}

#[test]
fn debug_level_gates_trace_messages() {
    let (manager, logger) = manager_with_memory_log();
    let _subscription = manager.register_container("toasts");

    manager.show("a", "toasts", ContainerViewConfiguration::default());
    assert!(logger.is_empty());

    manager.diagnostics().set_debug_level(DebugLevel::new(2));
    manager.show("a", "toasts", ContainerViewConfiguration::default());
    assert_eq!(logger.count_of(LogType::Info), 1);
}

#[test]
fn removed_container_stops_delivery() {
    let manager = ContainerManager::new();
    let mut subscription = manager.register_container("popup");
    manager.remove_container("popup");

    assert_eq!(manager.container_count(), 0);
    assert!(manager
        .show("late", "popup", ContainerViewConfiguration::default())
        .is_none());
    assert!(subscription.try_next().is_none());
    assert!(subscription.is_terminated());

    let mut queue = ContainerQueue::new(ContainerConfiguration::default());
    assert!(!queue.pump(&mut subscription, Instant::now()));
}

#[test]
fn self_configured_view_resolves_against_container() {
    let manager = ContainerManager::new();
    let mut subscription = manager.register_container("banners");
    let mut queue = ContainerQueue::new(
        ContainerConfiguration::new(DisplayType::Stacking, QueueType::OneByOneWaitFinish)
            .with_background(red()),
    );
    let start = Instant::now();

    manager.show_container_view(Banner { title: "first" }, "banners");
    manager.show_container_view(Banner { title: "second" }, "banners");
    queue.pump(&mut subscription, start);

    let titles: Vec<_> = queue
        .visible()
        .filter_map(|entry| entry.view().payload().downcast_ref::<Banner>())
        .map(|banner| banner.title)
        .collect();
    assert_eq!(titles, vec!["first"]);
    assert_eq!(queue.waiting_count(), 1);
    assert_eq!(
        queue.background(),
        ContainerBackgroundStyle::Blur(Material::Thin)
    );

    // The first banner times out and the second one takes its place.
    queue.tick(start + Duration::from_secs(3));
    let titles: Vec<_> = queue
        .visible()
        .filter_map(|entry| entry.view().payload().downcast_ref::<Banner>())
        .map(|banner| banner.title)
        .collect();
    assert_eq!(titles, vec!["second"]);
}

#[test]
fn dismiss_fan_out_reaches_every_listed_container() {
    let manager = ContainerManager::new();
    let mut top = manager.register_container("top");
    let mut bottom = manager.register_container("bottom");
    let mut untouched = manager.register_container("side");

    manager.dismiss_all_views(&["top", "bottom"], false);

    assert!(matches!(
        top.try_next(),
        Some(ContainerEvent::DismissAll { animated: false })
    ));
    assert!(matches!(
        bottom.try_next(),
        Some(ContainerEvent::DismissAll { animated: false })
    ));
    assert!(untouched.try_next().is_none());
}

#[test]
fn appear_and_disappear_follow_lifecycle() {
    let manager = ContainerManager::new();
    let mut subscription = manager.register_container("toasts");
    let mut queue = ContainerQueue::new(ContainerConfiguration::default());
    let appeared = Arc::new(AtomicUsize::new(0));
    let disappeared = Arc::new(AtomicUsize::new(0));
    let (a, d) = (Arc::clone(&appeared), Arc::clone(&disappeared));
    let start = Instant::now();

    let id = manager
        .show(
            "saved",
            "toasts",
            ContainerViewConfiguration::new()
                .on_appear(move || {
                    a.fetch_add(1, Ordering::SeqCst);
                })
                .on_disappear(move || {
                    d.fetch_add(1, Ordering::SeqCst);
                }),
        )
        .expect("container registered");
    queue.pump(&mut subscription, start);
    assert_eq!(appeared.load(Ordering::SeqCst), 1);

    manager.dismiss(id, "toasts", true);
    queue.pump(&mut subscription, start);
    assert_eq!(disappeared.load(Ordering::SeqCst), 0);

    let deadline = queue.next_deadline().expect("cleanup pending");
    queue.tick(deadline);
    assert_eq!(disappeared.load(Ordering::SeqCst), 1);
    assert!(queue.is_empty());
}

#[test]
fn concurrent_producers_share_one_manager() {
    let manager = Arc::new(ContainerManager::new());
    let mut subscription = manager.register_container("toasts");

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || {
                for _ in 0..8 {
                    manager.show(worker, "toasts", ContainerViewConfiguration::default());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("producer thread");
    }

    let mut received = 0;
    while subscription.try_next().is_some() {
        received += 1;
    }
    assert_eq!(received, 32);
}

#[tokio::test]
async fn subscription_awaits_events_until_removed() {
    let manager = Arc::new(ContainerManager::new());
    let mut subscription = manager.register_container("sheet");

    let producer = Arc::clone(&manager);
    let task = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        producer.show("hello", "sheet", ContainerViewConfiguration::default());
        producer.remove_container("sheet");
    });

    let event = subscription.next().await;
    assert!(event.as_ref().and_then(ContainerEvent::as_show).is_some());
    assert!(subscription.next().await.is_none());
    assert!(subscription.is_terminated());
    task.await.expect("producer task");
}

#[test]
fn config_round_trip_configures_manager() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let config = Config {
        log_enabled: Some(false),
        debug_level: Some(3),
        cleanup_delay_ms: Some(120),
        channel_capacity: Some(8),
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, config);

    let manager = ContainerManager::from_config(&loaded);
    assert!(!manager.diagnostics().is_enabled());
    assert_eq!(manager.diagnostics().debug_level(), DebugLevel::new(3));
    assert_eq!(loaded.cleanup_delay(), CleanupDelay::from_millis(120));

    let mut subscription = manager.register_container("toasts");
    let mut queue = ContainerQueue::from_config(ContainerConfiguration::default(), &loaded);
    let start = Instant::now();
    let id = manager
        .show("toast", "toasts", ContainerViewConfiguration::default())
        .expect("container registered");
    manager.dismiss(id, "toasts", true);
    queue.pump(&mut subscription, start);
    assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(120)));
}

#[test]
fn invalid_config_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "debug_level = [not toml").expect("Failed to write file");

    let loaded = config::load_from_path(&path).expect("Invalid TOML is not an error");
    assert_eq!(loaded, Config::default());
}
