use proptest::prelude::*;

use handmove_common::config::GestureConfig;
use handmove_frame_model::labels::{ScrollLabel, SlideLabel, ZoomLabel};
use handmove_frame_model::synthetic::HandPose;
use handmove_gesture_core::MovementClassifier;

proptest! {
    #[test]
    fn repeated_frame_never_scrolls_or_zooms(
        x in 0.05f64..0.95,
        y in 0.05f64..0.95,
        height in 0.05f64..0.9,
        repeats in 2usize..40,
    ) {
        let mut classifier = MovementClassifier::with_defaults();
        let frame = HandPose::upright(x, y, height).frame();
        for _ in 0..repeats {
            let labels = classifier.process(&frame).unwrap();
            prop_assert_eq!(labels.scroll, ScrollLabel::None);
            prop_assert_eq!(labels.zoom, ZoomLabel::None);
            prop_assert_eq!(labels.slide_label(), SlideLabel::None);
        }
    }

    #[test]
    fn no_slide_from_a_non_upright_pose(
        start_tilt in prop_oneof![15.0f64..80.0, -80.0f64..-15.0],
        end_tilt in -85.0f64..85.0,
    ) {
        let config = GestureConfig {
            slide_frame_stride: 1,
            ..Default::default()
        };
        let mut classifier = MovementClassifier::new(config).unwrap();
        let start = HandPose::upright(0.5, 0.5, 0.3).with_tilt(start_tilt).frame();
        let end = HandPose::upright(0.5, 0.5, 0.3).with_tilt(end_tilt).frame();

        classifier.process(&start).unwrap();
        let labels = classifier.process(&end).unwrap();
        prop_assert_eq!(labels.slide_label(), SlideLabel::None);
    }

    #[test]
    fn slide_memory_only_changes_on_slide_frames(
        poses in prop::collection::vec(
            (0.1f64..0.9, 0.1f64..0.9, 0.05f64..0.9, -60.0f64..60.0),
            1..30,
        ),
    ) {
        let mut classifier = MovementClassifier::with_defaults();
        for (x, y, height, tilt) in poses {
            let before = classifier.state();
            let frame = HandPose::upright(x, y, height).with_tilt(tilt).frame();
            let labels = classifier.process(&frame).unwrap();
            let after = classifier.state();

            // scroll and zoom memory follow every accepted frame
            prop_assert_eq!(after.frame_index, before.frame_index + 1);
            prop_assert_eq!(after.prev_center, Some(frame.rect.center()));
            prop_assert_eq!(after.prev_height, Some(frame.rect.height));
            if labels.frame_index % 2 == 1 {
                prop_assert_eq!(after.prev_angle_deg, before.prev_angle_deg);
                prop_assert_eq!(labels.slide_label(), SlideLabel::None);
            } else {
                prop_assert!(after.has_prev_angle());
            }
        }
    }
}
