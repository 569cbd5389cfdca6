use std::cell::RefCell;
use std::rc::Rc;

use teacard_core::carousel::infinite::CLONE_CLASS;
use teacard_core::carousel::{MoveCause, Motion};
use teacard_core::{Carousel, CarouselOptions, Element};

fn slides(n: usize) -> Vec<Element> {
    (0..n)
        .map(|i| Element::div(["item"]).with_text(i.to_string()))
        .collect()
}

fn settle(carousel: &mut Carousel) {
    let generation = carousel.pending_transition().expect("animating");
    assert!(carousel.transition_end(generation));
}

#[test]
fn five_slides_three_visible_get_three_clones_per_side() {
    let carousel = Carousel::new(slides(5), CarouselOptions::default()).expect("carousel");
    assert_eq!(carousel.offset(), 3);
    assert_eq!(carousel.slide_count(), 11);
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.real_index(), 0);

    let texts: Vec<_> = carousel.slides().iter().filter_map(Element::text).collect();
    assert_eq!(
        texts,
        vec!["2", "3", "4", "0", "1", "2", "3", "4", "0", "1", "2"]
    );
    let clones = carousel
        .slides()
        .iter()
        .filter(|s| s.has_class(CLONE_CLASS))
        .count();
    assert_eq!(clones, 6);
}

#[test]
fn next_and_settle_cycles_stay_on_real_slides() {
    let mut carousel = Carousel::new(slides(5), CarouselOptions::default()).expect("carousel");
    let mut reals = Vec::new();

    for _ in 0..5 {
        carousel.next();
        settle(&mut carousel);
        assert!((3..8).contains(&carousel.current_index()));
        assert_eq!(carousel.motion(), Motion::Idle);
        reals.push(carousel.real_index());
    }

    assert_eq!(reals, vec![1, 2, 3, 4, 0]);
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn prev_from_first_real_slide_rehomes_to_the_last() {
    let mut carousel = Carousel::new(slides(5), CarouselOptions::default()).expect("carousel");
    carousel.prev();
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.real_index(), 4);

    settle(&mut carousel);
    assert_eq!(carousel.current_index(), 7);
    assert_eq!(carousel.real_index(), 4);
    assert!(carousel.view().transition_suppressed);
}

#[test]
fn rehome_notifies_listeners() {
    let mut carousel = Carousel::new(slides(5), CarouselOptions::default()).expect("carousel");
    carousel.go_to(7, false);

    let causes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&causes);
    carousel.on_move(move |event| {
        sink.borrow_mut().push((event.cause, event.index));
        None
    });

    carousel.next();
    settle(&mut carousel);

    assert_eq!(
        *causes.borrow(),
        vec![(MoveCause::Navigate, 8), (MoveCause::Rehome, 3)]
    );
}

#[test]
fn completion_of_a_superseded_animation_is_ignored() {
    let mut carousel = Carousel::new(slides(5), CarouselOptions::default()).expect("carousel");
    carousel.next();
    let stale = carousel.pending_transition().expect("animating");
    carousel.next();

    assert!(!carousel.transition_end(stale));
    assert_eq!(carousel.current_index(), 5);

    settle(&mut carousel);
    assert_eq!(carousel.current_index(), 5);
}

#[test]
fn offset_grows_with_the_scroll_step() {
    let options = CarouselOptions::default().with_slides_to_scroll(2);
    let carousel = Carousel::new(slides(6), options).expect("carousel");
    assert_eq!(carousel.offset(), 4);
    assert_eq!(carousel.slide_count(), 14);
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn too_few_slides_downgrade_infinite_mode() {
    let carousel = Carousel::new(slides(2), CarouselOptions::default()).expect("carousel");
    let options = carousel.options();
    assert!(!options.infinite);
    assert!(!options.slide_indicator);
    assert!(!options.loop_mode);
    assert_eq!(carousel.slide_count(), 2);
    assert!(carousel.pager().is_none());
    assert!(carousel.view().indicators.is_empty());
}

#[test]
fn exactly_visible_slides_keep_infinite_mode() {
    let carousel = Carousel::new(slides(3), CarouselOptions::default()).expect("carousel");
    assert!(carousel.options().infinite);
    assert_eq!(carousel.slide_count(), 9);
}

#[test]
fn exactly_visible_slides_drop_loop_mode() {
    let options = CarouselOptions::default()
        .with_infinite(false)
        .with_loop(true);
    let carousel = Carousel::new(slides(3), options).expect("carousel");
    assert!(!carousel.options().loop_mode);
    assert!(!carousel.options().slide_indicator);
}
