// SPDX-License-Identifier: MPL-2.0
use iced::{window, Size};
use iced_bubbles::config::{self, BubbleStyle};
use iced_bubbles::ui::bubbles::{HostEvent, Message, Phase};
use iced_bubbles::{Bubble, Coordinator, Error, Hosts};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn bubble_lifecycle_on_first_window() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut hosts = Hosts::new();
    let main = window::Id::unique();
    hosts.update(HostEvent::Opened(main, Size::new(390.0, 844.0)));

    let mut coordinator = Coordinator::default();
    let start = Instant::now();
    let id = Bubble::new("Saved")
        .show(&mut coordinator, hosts.first().as_ref(), start)
        .expect("a window is open");

    let style = *coordinator.style();
    let settled = start + style.push_duration();
    let frames = coordinator.frames(settled);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].id, id);
    assert_eq!(frames[0].opacity, 1.0);
    assert_eq!(frames[0].max_width, 370.0);

    coordinator.update(Message::Tick(start + style.lifetime()));
    assert_eq!(coordinator.frames(start + style.lifetime())[0].phase, Phase::FadingOut);

    coordinator.update(Message::Tick(start + style.lifetime() + style.fade_duration()));
    assert!(coordinator.is_empty());
}

#[test]
fn n_bubbles_stack_with_strictly_increasing_offsets() {
    let mut hosts = Hosts::new();
    hosts.opened(window::Id::unique(), Size::new(800.0, 600.0));

    let style = BubbleStyle::default().with_vertical_margin(6.0);
    let mut coordinator = Coordinator::new(style);
    let start = Instant::now();
    for i in 0..5 {
        coordinator
            .show(Bubble::new(format!("bubble {i}")), hosts.first().as_ref(), start)
            .expect("a window is open");
    }

    let frames = coordinator.frames(start + style.push_duration());
    // Oldest bubble sits highest
    for pair in frames.windows(2) {
        let (older, newer) = (&pair[0], &pair[1]);
        assert!(older.offset > newer.offset);
        let gap = older.offset - (newer.offset + newer.height);
        assert!((gap - 6.0).abs() < 1e-3, "gap was {gap}");
    }
}

#[test]
fn showing_without_any_window_fails() {
    let hosts = Hosts::new();
    let mut coordinator = Coordinator::default();

    let result = Bubble::new("nowhere").show(&mut coordinator, hosts.first().as_ref(), Instant::now());

    assert_eq!(result, Err(Error::NoHostSurface));
    assert!(coordinator.is_empty());
    assert!(coordinator.overlay().is_none());
}

#[test]
fn style_loaded_from_file_drives_timing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("bubbles.toml");
    let style = BubbleStyle::default()
        .with_lifetime(Duration::from_millis(800))
        .with_fade_duration(Duration::from_millis(200));
    config::save_to_path(&style, &path).expect("Failed to write style file");

    let loaded = config::load_from_path(&path).expect("Failed to load style file");
    let mut coordinator = Coordinator::new(loaded);
    let host = iced_bubbles::Host::new(window::Id::unique(), Size::new(320.0, 480.0));
    let start = Instant::now();
    coordinator
        .show(Bubble::new("quick"), Some(&host), start)
        .expect("host is available");

    assert!(coordinator.tick(start + Duration::from_millis(999)).is_empty());
    assert_eq!(coordinator.tick(start + Duration::from_millis(1_000)).len(), 1);

    dir.close().expect("Failed to close temporary directory");
}
