use std::time::Duration;

use portfolio::content::Portfolio;
use portfolio::driver::CarouselDriver;
use portfolio::input::Input;
use portfolio::{Carousel, CarouselError};

const SETTLE: Duration = Duration::from_millis(300);

#[test]
fn three_items_debounce_and_wrap() {
    let mut slider = Carousel::new(vec!["A", "B", "C"], SETTLE).unwrap();

    assert_eq!(slider.next(), Some(1));
    assert_eq!(*slider.current_item(), "B");
    assert_eq!(slider.next(), None);
    assert_eq!(*slider.current_item(), "B");

    slider.update(SETTLE);
    assert_eq!(slider.next(), Some(2));
    assert_eq!(*slider.current_item(), "C");

    slider.update(SETTLE);
    assert_eq!(slider.next(), Some(0));
    assert_eq!(*slider.current_item(), "A");
}

#[test]
fn go_to_is_immediate_and_repeat_is_noop() {
    let mut slider = Carousel::new(vec!["A", "B", "C"], SETTLE).unwrap();
    assert_eq!(slider.go_to(2), Ok(Some(2)));
    assert!(slider.is_transitioning());
    assert_eq!(slider.go_to(2), Ok(None));
    assert_eq!(slider.current_index(), 2);
}

#[test]
fn keyboard_storm_moves_one_slide() {
    let portfolio = Portfolio::default();
    let mut slider = Carousel::new(portfolio.experiences, SETTLE).unwrap();
    let frame = Duration::from_millis(16);

    // Holding the right arrow repeats the key every frame for 200 ms.
    for _ in 0..12 {
        let _ = Input::Next.apply(&mut slider);
        slider.update(frame);
    }
    assert_eq!(slider.current_item().company, "SUZOCO");

    slider.update(SETTLE);
    assert_eq!(Input::GoTo(2).apply(&mut slider), Ok(Some(2)));
    assert_eq!(slider.current_item().company, "NEEPCO");
}

#[test]
fn indicator_out_of_range_leaves_slider_alone() {
    let portfolio = Portfolio::default();
    let mut slider = Carousel::new(portfolio.experiences, SETTLE).unwrap();
    assert_eq!(
        slider.go_to(3),
        Err(CarouselError::InvalidIndex { index: 3, len: 3 })
    );
    assert_eq!(slider.current_index(), 0);
    assert!(!slider.is_transitioning());
}

#[tokio::test(start_paused = true)]
async fn driver_runs_slider_and_taglines_independently() {
    let portfolio = Portfolio::default();
    let slider = CarouselDriver::spawn(Carousel::new(portfolio.experiences, SETTLE).unwrap(), None);
    let taglines = CarouselDriver::spawn(
        Carousel::auto_advancing(portfolio.taglines).unwrap(),
        Some(Duration::from_millis(2500)),
    );

    assert_eq!(slider.previous().await, Ok(Some(2)));
    tokio::time::sleep(Duration::from_millis(2600)).await;

    assert_eq!(taglines.snapshot().current_index, 1);
    let snapshot = slider.snapshot();
    assert_eq!(snapshot.current_index, 2);
    assert!(!snapshot.is_transitioning);

    slider.shutdown().await;
    drop(taglines);
}
