use std::cell::RefCell;
use std::rc::Rc;

use teacard_core::carousel::{MoveCause, MoveEvent, Motion};
use teacard_core::{Carousel, CarouselError, CarouselOptions, EdgePolicy, Element, Navigation};

fn slides(n: usize) -> Vec<Element> {
    (0..n)
        .map(|i| Element::div(["item"]).with_text(i.to_string()))
        .collect()
}

fn plain() -> CarouselOptions {
    CarouselOptions::default().with_infinite(false)
}

fn looping() -> CarouselOptions {
    plain().with_loop(true)
}

fn record_events(carousel: &mut Carousel) -> Rc<RefCell<Vec<MoveEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    carousel.on_move(move |event| {
        sink.borrow_mut().push(*event);
        None
    });
    events
}

#[test]
fn loop_and_infinite_together_are_rejected() {
    let options = CarouselOptions::default().with_loop(true).with_infinite(true);
    let err = Carousel::new(slides(5), options).expect_err("conflict");
    assert_eq!(err, CarouselError::ConflictingModes);
}

#[test]
fn zero_visible_is_rejected() {
    let err = Carousel::new(slides(5), plain().with_slides_visible(0)).expect_err("invalid");
    assert!(matches!(err, CarouselError::InvalidOption { name: "slidesVisible", .. }));
}

#[test]
fn prev_at_start_of_plain_carousel_is_a_no_op() {
    let mut carousel = Carousel::new(slides(5), plain()).expect("carousel");
    let events = record_events(&mut carousel);
    assert!(carousel.view().prev_hidden);

    carousel.prev();
    carousel.click_prev();

    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.view().prev_hidden);
    assert!(events.borrow().is_empty());
}

#[test]
fn next_past_the_last_page_of_plain_carousel_wraps_to_start() {
    let mut carousel = Carousel::new(slides(5), plain()).expect("carousel");
    carousel.next();
    assert!(!carousel.view().prev_hidden);
    carousel.next();
    assert_eq!(carousel.current_index(), 2);
    assert!(carousel.view().next_hidden);

    carousel.click_next();
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.view().prev_hidden);
}

#[test]
fn next_agrees_with_go_to_one_step_ahead() {
    let mut stepped = Carousel::new(slides(5), plain()).expect("carousel");
    let mut jumped = Carousel::new(slides(5), plain()).expect("carousel");
    stepped.go_to(2, false);
    jumped.go_to(2, false);

    stepped.next();
    jumped.go_to(jumped.current_index() as isize + 1, true);
    assert_eq!(stepped.current_index(), jumped.current_index());
    assert_eq!(stepped.current_index(), 0);
}

#[test]
fn next_stops_at_the_last_page_of_clamped_plain_carousel() {
    let options = plain().with_edge_policy(EdgePolicy::Clamp);
    let mut carousel = Carousel::new(slides(5), options).expect("carousel");
    let events = record_events(&mut carousel);
    carousel.go_to(2, false);
    assert!(carousel.view().next_hidden);

    carousel.next();
    carousel.click_next();
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn loop_mode_wraps_at_both_ends() {
    let mut carousel = Carousel::new(slides(5), looping()).expect("carousel");
    carousel.prev();
    assert_eq!(carousel.current_index(), 2);

    carousel.next();
    assert_eq!(carousel.current_index(), 0);
    let view = carousel.view();
    assert!(!view.prev_hidden && !view.next_hidden);
}

#[test]
fn go_to_past_the_end_wraps_to_start() {
    let mut carousel = Carousel::new(slides(8), looping()).expect("carousel");
    carousel.go_to(3, true);
    assert_eq!(carousel.current_index(), 3);
    carousel.go_to(9, true);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn clamp_policy_stops_at_the_edges() {
    let options = looping().with_edge_policy(EdgePolicy::Clamp);
    let mut carousel = Carousel::new(slides(8), options).expect("carousel");

    carousel.go_to(100, true);
    assert_eq!(carousel.current_index(), 5);
    carousel.next();
    assert_eq!(carousel.current_index(), 5);
    carousel.go_to(-3, true);
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn stale_transition_completion_is_ignored() {
    let mut carousel = Carousel::new(slides(8), plain()).expect("carousel");

    carousel.go_to(1, true);
    let stale = carousel.pending_transition().expect("animating");
    carousel.go_to(2, true);
    let live = carousel.pending_transition().expect("animating");
    assert_ne!(stale, live);

    assert!(!carousel.transition_end(stale));
    assert_eq!(carousel.motion(), Motion::Animating { generation: live });
    assert_eq!(carousel.current_index(), 2);

    assert!(carousel.transition_end(live));
    assert_eq!(carousel.motion(), Motion::Idle);
    assert!(!carousel.transition_end(live));
}

#[test]
fn instant_moves_skip_the_animation() {
    let mut carousel = Carousel::new(slides(8), plain()).expect("carousel");
    carousel.go_to(2, true);
    assert!(!carousel.view().transition_suppressed);

    carousel.go_to(4, false);
    assert_eq!(carousel.motion(), Motion::Idle);
    assert_eq!(carousel.pending_transition(), None);
    assert!(carousel.view().transition_suppressed);
}

#[test]
fn listeners_see_every_move_in_order() {
    let mut carousel = Carousel::new(slides(8), plain()).expect("carousel");
    let events = record_events(&mut carousel);

    carousel.next();
    carousel.go_to(4, false);

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].index, 1);
    assert_eq!(events[1].index, 4);
    assert!(events.iter().all(|e| e.cause == MoveCause::Navigate));
}

#[test]
fn navigation_returned_by_a_listener_runs_after_dispatch() {
    let mut carousel = Carousel::new(slides(8), plain()).expect("carousel");
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    carousel.on_move(move |event| {
        sink.borrow_mut().push(("first", event.index));
        (event.index == 1).then_some(Navigation::Next)
    });
    let sink = Rc::clone(&seen);
    carousel.on_move(move |event| {
        sink.borrow_mut().push(("second", event.index));
        None
    });

    carousel.next();

    assert_eq!(carousel.current_index(), 2);
    assert_eq!(
        *seen.borrow(),
        vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]
    );
}

#[test]
fn runaway_listener_chains_are_bounded() {
    let mut carousel = Carousel::new(slides(5), looping()).expect("carousel");
    let calls = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&calls);
    carousel.on_move(move |_| {
        *counter.borrow_mut() += 1;
        Some(Navigation::Next)
    });

    carousel.next();

    assert_eq!(*calls.borrow(), 32);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let mut carousel = Carousel::new(slides(5), plain()).expect("carousel");
    let calls = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&calls);
    let id = carousel.on_move(move |_| {
        *counter.borrow_mut() += 1;
        None
    });

    carousel.next();
    assert!(carousel.off_move(id));
    assert!(!carousel.off_move(id));
    carousel.next();

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(carousel.listener_count(), 0);
}
