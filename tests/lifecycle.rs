// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle scenarios on the virtual clock.

use iced::widget::image::Handle;
use iced_snackbar::domain::{Insets, MinHeight, Size};
use iced_snackbar::runtime::{HeadlessHost, ManualScheduler};
use iced_snackbar::snackbar::{Host, LifecycleState, Message, Phase, Snackbar, SnackbarOptions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn icon() -> Handle {
    Handle::from_rgba(1, 1, vec![0, 200, 0, 255])
}

fn options() -> SnackbarOptions {
    SnackbarOptions::default().min_height(MinHeight::new(48.0))
}

fn phone() -> HeadlessHost {
    HeadlessHost::new(Size::new(375.0, 667.0))
}

/// Advances the clock and feeds every due message back to the snackbars.
///
/// Messages are delivered at the end of the step, so anything they schedule
/// starts counting from there.
fn step(
    snackbars: &mut [Snackbar],
    host: &mut HeadlessHost,
    scheduler: &mut ManualScheduler,
    by: Duration,
) -> Vec<Message> {
    let due = scheduler.advance(by);
    for message in &due {
        for snackbar in snackbars.iter_mut() {
            snackbar.update(*message, host, scheduler);
        }
    }
    due
}

#[test]
fn saved_snackbar_runs_full_timeline() {
    let mut host = phone();
    let mut scheduler = ManualScheduler::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);

    let snackbar = Snackbar::with_options("Saved", icon(), options().auto_dismiss_delay(Duration::from_millis(1500)))
        .on_dismiss(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
    let id = snackbar.id();
    let mut snackbars = vec![snackbar];

    snackbars[0].show(&mut host, &mut scheduler);
    assert_eq!(snackbars[0].state(), LifecycleState::Presented);
    assert_eq!(host.offset(id), Some(-16.0));

    // Entrance settles at 0.5s, nothing else happens.
    let due = step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(500));
    assert_eq!(
        due,
        vec![Message::AnimationFinished {
            id,
            phase: Phase::Entrance
        }]
    );
    assert_eq!(snackbars[0].state(), LifecycleState::Presented);

    // Timer fires at 1.5s and the card starts leaving.
    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(1000));
    assert_eq!(snackbars[0].state(), LifecycleState::DismissRequested);
    assert_eq!(host.offset(id), Some(48.0));
    assert!(host.is_attached(id));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    // Exit animation completes at 2.0s.
    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(500));
    assert_eq!(snackbars[0].state(), LifecycleState::Dismissed);
    assert!(!host.is_attached(id));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(scheduler.elapsed(), Duration::from_secs(2));

    // Nothing left to fire.
    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_secs(10));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(host.detach_count(id), 1);
}

#[test]
fn tap_before_timer_cancels_auto_dismiss() {
    let mut host = phone();
    let mut scheduler = ManualScheduler::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);

    let snackbar = Snackbar::with_options("Saved", icon(), options()).on_dismiss(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    let id = snackbar.id();
    let mut snackbars = vec![snackbar];
    snackbars[0].show(&mut host, &mut scheduler);

    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(200));
    snackbars[0].update(Message::Dismiss(id), &mut host, &mut scheduler);
    assert!(!snackbars[0].is_timer_armed());
    assert_eq!(scheduler.pending_timers(), 0);

    // A second tap while leaving is ignored.
    snackbars[0].update(Message::Dismiss(id), &mut host, &mut scheduler);

    // Gone exactly one animation duration after the tap.
    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(499));
    assert_eq!(snackbars[0].state(), LifecycleState::DismissRequested);
    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(1));
    assert!(snackbars[0].is_dismissed());
    assert!(!host.is_attached(id));

    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_secs(5));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(host.detach_count(id), 1);
}

#[test]
fn callback_sees_final_state() {
    let mut host = phone();
    let mut scheduler = ManualScheduler::new();
    let observed = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&observed);

    let snackbar = Snackbar::with_options("Copied", icon(), options()).on_dismiss(move |snackbar| {
        if let Ok(mut slot) = slot.lock() {
            *slot = Some((snackbar.message().to_string(), snackbar.state()));
        }
    });
    let mut snackbars = vec![snackbar];
    snackbars[0].show(&mut host, &mut scheduler);
    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_secs(2));
    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_secs(1));

    let observed = observed.lock().expect("lock").clone();
    assert_eq!(
        observed,
        Some(("Copied".to_string(), LifecycleState::Dismissed))
    );
}

#[test]
fn dismiss_before_show_then_show_works() {
    let mut host = phone();
    let mut scheduler = ManualScheduler::new();
    let mut snackbar = Snackbar::with_options("Saved", icon(), options());

    snackbar.dismiss(&mut host, &mut scheduler);
    assert_eq!(snackbar.state(), LifecycleState::Created);
    assert_eq!(host.attached_count(), 0);

    snackbar.show(&mut host, &mut scheduler);
    assert_eq!(snackbar.state(), LifecycleState::Presented);
    assert_eq!(host.attach_count(snackbar.id()), 1);
}

#[test]
fn independent_snackbars_share_a_host() {
    let mut host = phone();
    let mut scheduler = ManualScheduler::new();
    let first = Snackbar::with_options("First", icon(), options());
    let second = Snackbar::with_options(
        "Second",
        icon(),
        options().auto_dismiss_delay(Duration::from_secs(3)),
    );
    let (first_id, second_id) = (first.id(), second.id());
    let mut snackbars = vec![first, second];
    for snackbar in &mut snackbars {
        snackbar.show(&mut host, &mut scheduler);
    }
    assert_eq!(host.attached_count(), 2);

    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(1500));
    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(500));
    assert!(!host.is_attached(first_id));
    assert!(host.is_attached(second_id));

    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(1000));
    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(500));
    assert_eq!(host.attached_count(), 0);
}

#[test]
fn long_message_grows_card_and_hides_below_safe_area() {
    let mut host = HeadlessHost::new(Size::new(375.0, 812.0))
        .with_safe_area(Insets::new(44.0, 0.0, 34.0, 0.0));
    let mut scheduler = ManualScheduler::new();
    let text = "The file could not be uploaded because the connection dropped. ".repeat(6);
    let mut snackbars = vec![Snackbar::with_options(text, icon(), options())];
    let id = snackbars[0].id();

    snackbars[0].show(&mut host, &mut scheduler);
    let height = snackbars[0].height();
    assert!(height > 48.0);
    assert_eq!(host.offset_history(id).first().copied(), Some(height + 34.0));

    step(&mut snackbars, &mut host, &mut scheduler, Duration::from_millis(1500));
    assert_eq!(host.offset(id), Some(height + 34.0));
}

#[test]
fn dismiss_immediately_skips_exit_animation() {
    let mut host = phone();
    let mut scheduler = ManualScheduler::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let mut snackbar = Snackbar::with_options("Saved", icon(), options()).on_dismiss(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    snackbar.show(&mut host, &mut scheduler);
    snackbar.dismiss_immediately(&mut host, &mut scheduler);

    assert!(snackbar.is_dismissed());
    assert_eq!(host.attached_count(), 0);
    assert_eq!(scheduler.pending_timers(), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
