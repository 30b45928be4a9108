use handmove_frame_model::frame::{parse_frames, serialize_frames, FrameInput, HandRect};
use handmove_frame_model::labels::{LabelRecord, ScrollLabel, SlideLabel, ZoomLabel};
use handmove_frame_model::synthetic::{stamp, SyntheticGesture};
use handmove_gesture_core::MovementClassifier;

fn classify(frames: &[FrameInput]) -> Vec<LabelRecord> {
    let mut classifier = MovementClassifier::with_defaults();
    frames
        .iter()
        .map(|frame| {
            classifier
                .process(frame)
                .expect("synthetic frames should be valid")
                .to_record(frame.t)
        })
        .collect()
}

fn count<T: PartialEq>(values: impl Iterator<Item = T>, wanted: T) -> usize {
    values.filter(|v| *v == wanted).count()
}

#[test]
fn scroll_sequences_are_labelled_every_frame_after_the_first() {
    let cases = [
        (SyntheticGesture::ScrollRight, ScrollLabel::Right),
        (SyntheticGesture::ScrollUp, ScrollLabel::Up),
        (SyntheticGesture::ScrollLeft, ScrollLabel::Left),
        (SyntheticGesture::ScrollDown, ScrollLabel::Down),
    ];

    for (gesture, expected) in cases {
        let records = classify(&gesture.frames(10));
        assert_eq!(records[0].scroll, ScrollLabel::None, "{}", gesture.name());
        assert!(
            records[1..].iter().all(|r| r.scroll == expected),
            "{}: {:?}",
            gesture.name(),
            records
        );
        assert!(records.iter().all(|r| r.zoom.is_none()));
        assert!(records.iter().all(|r| r.slide.is_none()));
    }
}

#[test]
fn zoom_sequences_are_labelled_every_frame_after_the_first() {
    let records = classify(&SyntheticGesture::ZoomIn.frames(10));
    assert_eq!(count(records.iter().map(|r| r.zoom), ZoomLabel::In), 10);
    assert!(records.iter().all(|r| r.scroll.is_none()));

    let records = classify(&SyntheticGesture::ZoomOut.frames(10));
    assert_eq!(count(records.iter().map(|r| r.zoom), ZoomLabel::Out), 10);
    assert!(records.iter().all(|r| r.scroll.is_none()));
}

#[test]
fn slide_fires_once_when_leaving_the_upright_pose() {
    let records = classify(&SyntheticGesture::SlideLeft.frames(4));
    let slides: Vec<_> = records.iter().map(|r| r.slide).collect();
    assert_eq!(
        slides,
        vec![
            SlideLabel::None,
            SlideLabel::None,
            SlideLabel::Left,
            SlideLabel::None,
            SlideLabel::None,
        ]
    );
    assert!(records.iter().all(|r| r.scroll.is_none() && r.zoom.is_none()));

    let records = classify(&SyntheticGesture::SlideRight.frames(4));
    assert_eq!(count(records.iter().map(|r| r.slide), SlideLabel::Right), 1);
    assert_eq!(records[2].slide, SlideLabel::Right);
}

#[test]
fn idle_hand_produces_no_labels() {
    let records = classify(&SyntheticGesture::Idle.frames(30));
    assert_eq!(records.len(), 31);
    assert!(records.iter().all(|r| !r.has_movement()));
}

#[test]
fn end_to_end_rect_sequence_scrolls_right() {
    let landmarks = SyntheticGesture::Idle.frames(0)[0].landmarks.clone();
    let frames = vec![
        FrameInput::new(HandRect::new(0.5, 0.5, 0.3), landmarks.clone()),
        FrameInput::new(HandRect::new(0.56, 0.5, 0.3), landmarks),
    ];
    let records = classify(&frames);
    assert_eq!(records[1].scroll, ScrollLabel::Right);
    assert_eq!(records[1].zoom, ZoomLabel::None);
}

#[test]
fn replay_through_jsonl_keeps_timestamps_aligned() {
    let mut frames = SyntheticGesture::ScrollDown.frames(6);
    stamp(&mut frames, 30);

    let jsonl = serialize_frames(&frames).unwrap();
    let parsed = parse_frames(&format!("# synthetic scroll-down\n{jsonl}")).unwrap();
    assert_eq!(parsed.len(), frames.len());

    let records = classify(&parsed);
    for (record, frame) in records.iter().zip(&frames) {
        assert_eq!(record.t, frame.t);
    }
    assert_eq!(records.last().unwrap().frame, 6);
    assert_eq!(records.last().unwrap().scroll, ScrollLabel::Down);
}
