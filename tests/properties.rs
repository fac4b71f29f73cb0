use portfolio_site::contact::{ContactField, ContactForm, FormValidationError};
use portfolio_site::reveal::{Rect, RevealController};
use portfolio_site::scroll::{progress, ScrollMetrics, ScrollTracker, SCROLL_TOP_THRESHOLD};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn viewport() -> Rect {
    Rect::viewport(1280.0, 800.0)
}

fn rect() -> impl Strategy<Value = Rect> {
    (-4000.0..4000.0f64, -4000.0..4000.0f64, 0.0..2000.0f64, 0.0..2000.0f64)
        .prop_map(|(left, top, width, height)| Rect::new(left, top, width, height))
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn progress_matches_clamped_ratio(offset in 0.0..1.0e6f64, scrollable in 0.0..1.0e6f64) {
        let p = progress(offset, scrollable);
        prop_assert!((0.0..=1.0).contains(&p));
        if scrollable > 0.0 {
            prop_assert_eq!(p, (offset / scrollable).clamp(0.0, 1.0));
        } else {
            prop_assert_eq!(p, 0.0);
        }
    }

    #[test]
    fn progress_is_always_in_unit_range(
        offset in proptest::num::f64::ANY,
        document_height in proptest::num::f64::ANY,
        viewport_height in proptest::num::f64::ANY,
    ) {
        let state = ScrollTracker::new()
            .measure(ScrollMetrics::new(offset, document_height, viewport_height));
        prop_assert!((0.0..=1.0).contains(&state.progress()));
        prop_assert!(state.raw_offset >= 0.0);
    }

    #[test]
    fn threshold_flag_tracks_offset(offset in 0.0..2000.0f64) {
        let state = ScrollTracker::new().measure(ScrollMetrics::new(offset, 10_000.0, 800.0));
        prop_assert_eq!(state.is_past_threshold(), offset > SCROLL_TOP_THRESHOLD);
    }

    #[test]
    fn reveal_latch_is_monotonic(
        events in proptest::collection::vec(prop_oneof![
            any::<bool>().prop_map(Ok::<bool, Rect>),
            rect().prop_map(Err::<bool, Rect>),
        ], 0..64)
    ) {
        let mut controller = RevealController::new();
        let mut flips = 0;
        let mut was_revealed = false;
        for event in events {
            let flipped = match event {
                Ok(intersecting) => controller.observe_intersection(intersecting),
                Err(region) => controller.observe_geometry(region, viewport()),
            };
            if flipped {
                flips += 1;
            }
            prop_assert!(!(was_revealed && !controller.is_revealed()));
            prop_assert_eq!(flipped, !was_revealed && controller.is_revealed());
            was_revealed = controller.is_revealed();
        }
        prop_assert!(flips <= 1);
    }

    #[test]
    fn disjoint_controllers_do_not_interact(
        regions in proptest::collection::vec((rect(), rect()), 0..32)
    ) {
        let mut first = RevealController::new();
        let mut second = RevealController::new();
        let mut first_alone = RevealController::new();
        for (a, b) in regions {
            first.observe_geometry(a, viewport());
            second.observe_geometry(b, viewport());
            first_alone.observe_geometry(a, viewport());
        }
        prop_assert_eq!(first.is_revealed(), first_alone.is_revealed());
    }

    #[test]
    fn rejected_submission_leaves_fields_alone(
        name in "[a-zA-Z ]{0,8}",
        email in "[a-z@.]{0,12}",
        message in "[a-z ]{0,16}",
    ) {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, name.clone());
        form.set_field(ContactField::Email, email.clone());
        form.set_field(ContactField::Message, message.clone());
        let before = form.fields().clone();

        match form.submit() {
            Err(FormValidationError::MissingFields) => {
                prop_assert!(name.is_empty() || email.is_empty() || message.is_empty());
                prop_assert_eq!(form.fields(), &before);
            }
            Err(FormValidationError::InvalidEmail) => {
                prop_assert_eq!(form.fields(), &before);
            }
            Ok(_) => {
                prop_assert!(form.is_submitting());
                prop_assert_eq!(form.error(), None);
            }
        }
        prop_assert!(!(form.is_success() && form.error().is_some()));
    }
}
