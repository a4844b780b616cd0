//! Call ordering between the sequencer and its host

use std::time::Duration;

use dynachart::prelude::*;
use pretty_assertions::assert_eq;

/// Adapter calls, in the order they were made
#[derive(Debug, Clone, PartialEq)]
enum Call {
    ColumnCount,
    Read(usize),
    Write(Vec<f64>),
    Color(usize, Color),
    Label(String),
    Commit,
}

/// A host that logs every call and serves fixed columns
struct RecordingAdapter {
    columns: Vec<ColumnSnapshot>,
    calls: Vec<Call>,
}

impl RecordingAdapter {
    fn new(columns: Vec<(&str, Vec<f64>)>) -> Self {
        let columns = columns
            .into_iter()
            .enumerate()
            .map(|(i, (label, values))| ColumnSnapshot::new(i, label, values))
            .collect();
        Self {
            columns,
            calls: Vec::new(),
        }
    }

    /// Calls other than point colors, which repeat for every row
    fn calls_without_colors(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, Call::Color(..)))
            .cloned()
            .collect()
    }
}

impl DataTableAdapter for RecordingAdapter {
    fn column_count(&mut self) -> Result<usize> {
        self.calls.push(Call::ColumnCount);
        Ok(self.columns.len())
    }

    fn read_column(&mut self, index: usize) -> Result<ColumnSnapshot> {
        self.calls.push(Call::Read(index));
        self.columns.get(index).cloned().ok_or(Error::ColumnNotFound {
            index,
            count: self.columns.len(),
        })
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.calls.push(Call::Write(frame.values().to_vec()));
        Ok(())
    }

    fn set_point_color(&mut self, row: usize, color: Color) -> Result<()> {
        self.calls.push(Call::Color(row, color));
        Ok(())
    }

    fn set_label(&mut self, text: &str) -> Result<()> {
        self.calls.push(Call::Label(text.to_string()));
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.calls.push(Call::Commit);
        Ok(())
    }
}

/// Records requested pauses instead of sleeping
#[derive(Default)]
struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, delay: Duration) -> Result<()> {
        self.pauses.push(delay);
        Ok(())
    }
}

fn sequencer(steps: u32) -> Sequencer<NoPacer> {
    let config = AnimationConfig::default().with_steps(steps).with_delay_ms(0);
    Sequencer::with_pacer(config, NoPacer).unwrap()
}

#[test]
fn test_run_visits_columns_in_order() {
    let mut host = RecordingAdapter::new(vec![
        ("A", vec![0.0, 10.0]),
        ("B", vec![10.0, 0.0]),
        ("C", vec![4.0, 4.0]),
    ]);
    let summary = sequencer(2).run(&mut host).unwrap();

    assert_eq!(
        host.calls_without_colors(),
        vec![
            Call::ColumnCount,
            Call::Read(0),
            // A -> B
            Call::Read(1),
            Call::Write(vec![5.0, 5.0]),
            Call::Commit,
            Call::Write(vec![10.0, 0.0]),
            Call::Commit,
            Call::Label("B".into()),
            Call::Commit,
            // B -> C
            Call::Read(2),
            Call::Write(vec![7.0, 2.0]),
            Call::Commit,
            Call::Write(vec![4.0, 4.0]),
            Call::Commit,
            Call::Label("C".into()),
            Call::Commit,
            // final recolor
            Call::Commit,
        ]
    );
    assert_eq!(
        summary,
        RunSummary {
            transitions: 2,
            frames_applied: 4,
            final_label: Some("C".into()),
        }
    );
}

#[test]
fn test_colors_reasserted_between_write_and_commit() {
    let mut host = RecordingAdapter::new(vec![("A", vec![1.0, 2.0, 3.0]), ("B", vec![3.0, 2.0, 1.0])]);
    let palette = Palette::parse_list("red,blue").unwrap();
    let config = AnimationConfig::default()
        .with_steps(1)
        .with_delay_ms(0)
        .with_palette(palette);
    Sequencer::with_pacer(config, NoPacer)
        .unwrap()
        .run(&mut host)
        .unwrap();

    let write = host
        .calls
        .iter()
        .position(|c| matches!(c, Call::Write(_)))
        .unwrap();
    assert_eq!(
        &host.calls[write..write + 5],
        &[
            Call::Write(vec![3.0, 2.0, 1.0]),
            Call::Color(0, Color::RED),
            Call::Color(1, Color::BLUE),
            Call::Color(2, Color::RED),
            Call::Commit,
        ]
    );
}

#[test]
fn test_advance_returns_exact_terminal_frame() {
    let mut host = RecordingAdapter::new(Vec::new());
    let current = ColumnSnapshot::new(3, "x", vec![0.1, 0.7]);
    let next = ColumnSnapshot::new(4, "y", vec![0.3, 0.2]);

    let terminal = sequencer(7).advance(&current, &next, &mut host).unwrap();
    assert_eq!(terminal.values(), next.values());

    let writes = host
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Write(_)))
        .count();
    assert_eq!(writes, 7);
}

#[test]
fn test_pause_after_every_frame() {
    let mut host = RecordingAdapter::new(vec![("A", vec![1.0]), ("B", vec![2.0]), ("C", vec![3.0])]);
    let mut pacer = RecordingPacer::default();
    let config = AnimationConfig::default().with_steps(3).with_delay_ms(25);

    Sequencer::with_pacer(config, &mut pacer)
        .unwrap()
        .run(&mut host)
        .unwrap();
    assert_eq!(pacer.pauses, vec![Duration::from_millis(25); 6]);
}

#[test]
fn test_prepare_shows_first_column() {
    let mut host = RecordingAdapter::new(vec![("Day 1", vec![2.0, 4.0]), ("Day 2", vec![1.0, 1.0])]);
    let mut sequencer = sequencer(3);
    sequencer.prepare(&mut host).unwrap();

    assert_eq!(
        host.calls_without_colors(),
        vec![
            Call::ColumnCount,
            Call::Read(0),
            Call::Write(vec![2.0, 4.0]),
            Call::Label("Day 1".into()),
            Call::Commit,
        ]
    );
    assert_eq!(sequencer.state(), SequencerState::Idle);
}

#[test]
fn test_single_column_has_no_transitions() {
    let mut host = RecordingAdapter::new(vec![("Only", vec![1.0, 2.0])]);
    let summary = sequencer(3).run(&mut host).unwrap();
    assert_eq!(summary.transitions, 0);
    assert_eq!(summary.frames_applied, 0);
    assert_eq!(summary.final_label.as_deref(), Some("Only"));
}

#[test]
fn test_empty_table_fails() {
    let mut host = RecordingAdapter::new(Vec::new());
    let mut sequencer = sequencer(3);
    assert!(matches!(sequencer.run(&mut host), Err(Error::EmptyTable)));
    assert_eq!(sequencer.state(), SequencerState::Failed);
}

#[test]
fn test_length_mismatch_stops_before_writing() {
    let mut host = RecordingAdapter::new(vec![("A", vec![1.0, 2.0]), ("B", vec![1.0, 2.0, 3.0])]);
    let mut sequencer = sequencer(3);
    let err = sequencer.run(&mut host).unwrap_err();

    match &err {
        Error::Transition {
            from, to, frame, ..
        } => assert_eq!((*from, *to, *frame), (0, 1, None)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        err.root_cause(),
        Error::LengthMismatch {
            current: 2,
            next: 3
        }
    ));
    assert!(!host.calls.iter().any(|c| matches!(c, Call::Write(_))));
    assert_eq!(sequencer.state(), SequencerState::Failed);
}

#[test]
fn test_shape_read_again_on_each_run() {
    let mut host = RecordingAdapter::new(vec![
        ("A", vec![0.0]),
        ("B", vec![1.0]),
        ("C", vec![2.0]),
    ]);
    let mut sequencer = sequencer(2);

    assert_eq!(sequencer.run(&mut host).unwrap().transitions, 2);

    host.columns.truncate(2);
    host.calls.clear();
    let summary = sequencer.run(&mut host).unwrap();

    assert_eq!(summary.transitions, 1);
    assert_eq!(summary.frames_applied, 2);
    assert_eq!(summary.final_label.as_deref(), Some("B"));
    assert_eq!(host.calls[0], Call::ColumnCount);
    assert!(!host.calls.contains(&Call::Read(2)));
}
