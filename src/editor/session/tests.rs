//! Unit tests for the session controller.

use bevy::prelude::*;

use super::super::color::{ColorSource, PolygonColor};
use super::super::draft::DraftState;
use super::super::error::SessionError;
use super::commands::{CommandOutcome, SessionCommand, UiVisibility};
use super::state::Session;

/// Deterministic color source that counts how often it was asked
#[derive(Default)]
struct FixedColors {
    calls: usize,
}

impl ColorSource for FixedColors {
    fn next_color(&mut self) -> PolygonColor {
        self.calls += 1;
        PolygonColor::new(0.1 * self.calls as f32, 0.5, 0.9)
    }
}

fn assert_visibility_invariant(session: &Session) {
    let visibility = session.visibility();
    assert_eq!(
        visibility.complete_visible,
        session.draft().vertex_count() > 0
    );
    assert_eq!(visibility.copy_visible, !session.polygons().is_empty());
}

fn run(session: &mut Session, colors: &mut FixedColors, commands: &[SessionCommand]) {
    for command in commands {
        session.dispatch(*command, colors);
        assert_visibility_invariant(session);
    }
}

fn unit_triangle_clicks() -> [SessionCommand; 3] {
    [
        SessionCommand::Click(Vec2::new(0.0, 0.0)),
        SessionCommand::Click(Vec2::new(1.0, 0.0)),
        SessionCommand::Click(Vec2::new(1.0, 1.0)),
    ]
}

#[test]
fn test_fresh_session_is_empty() {
    let session = Session::default();
    assert!(session.polygons().is_empty());
    assert_eq!(session.draft().state(), DraftState::Empty);
    assert_eq!(session.visibility(), UiVisibility::default());
    assert_eq!(session.frame().preview, None);
}

#[test]
fn test_complete_triangle_scenario() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());
    assert!(session.visibility().complete_visible);

    let outcome = session.dispatch(SessionCommand::Complete, &mut colors);
    assert_eq!(outcome, CommandOutcome::PolygonCompleted { index: 0 });

    assert_eq!(session.polygons().len(), 1);
    assert_eq!(
        session.polygons()[0].vertices(),
        &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]
    );
    assert_eq!(
        session.visibility(),
        UiVisibility {
            complete_visible: false,
            copy_visible: true,
        }
    );
    assert_eq!(session.draft().state(), DraftState::Empty);
    assert_eq!(session.frame().preview, None);
}

#[test]
fn test_complete_on_fresh_session_is_silent_noop() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();

    let outcome = session.dispatch(SessionCommand::Complete, &mut colors);

    assert_eq!(
        outcome,
        CommandOutcome::Ignored(SessionError::TooFewVertices { count: 0 })
    );
    assert!(session.polygons().is_empty());
    assert_eq!(session, Session::default());
    // No color consumed for a failed finalize
    assert_eq!(colors.calls, 0);
}

#[test]
fn test_complete_with_two_vertices_keeps_draft() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(
        &mut session,
        &mut colors,
        &[
            SessionCommand::Click(Vec2::new(0.0, 0.0)),
            SessionCommand::Click(Vec2::new(3.0, 0.0)),
            SessionCommand::Complete,
        ],
    );

    assert!(session.polygons().is_empty());
    assert_eq!(session.draft().vertex_count(), 2);
    assert!(session.visibility().complete_visible);
}

#[test]
fn test_polygon_gets_color_from_source() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());
    session.dispatch(SessionCommand::Complete, &mut colors);

    assert_eq!(
        session.polygons()[0].color(),
        PolygonColor::new(0.1, 0.5, 0.9)
    );
}

#[test]
fn test_copy_scenario_places_anchor_at_pointer() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());
    run(
        &mut session,
        &mut colors,
        &[
            SessionCommand::Complete,
            SessionCommand::Move(Vec2::new(5.0, 5.0)),
        ],
    );

    let outcome = session.dispatch(SessionCommand::Copy, &mut colors);
    assert_eq!(outcome, CommandOutcome::PolygonCopied { index: 1 });

    let polygons = session.polygons();
    assert_eq!(polygons.len(), 2);
    assert_eq!(
        polygons[1].vertices(),
        &[Vec2::new(5.0, 5.0), Vec2::new(6.0, 5.0), Vec2::new(6.0, 6.0)]
    );
    assert_eq!(polygons[1].color(), polygons[0].color());
    // Original untouched
    assert_eq!(
        polygons[0].vertices(),
        &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]
    );
}

#[test]
fn test_copy_duplicates_the_last_polygon() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());
    run(
        &mut session,
        &mut colors,
        &[
            SessionCommand::Complete,
            SessionCommand::Click(Vec2::new(10.0, 10.0)),
            SessionCommand::Click(Vec2::new(20.0, 10.0)),
            SessionCommand::Click(Vec2::new(20.0, 20.0)),
            SessionCommand::Click(Vec2::new(10.0, 20.0)),
            SessionCommand::Complete,
            SessionCommand::Move(Vec2::new(-50.0, 0.0)),
            SessionCommand::Copy,
        ],
    );

    let copy = &session.polygons()[2];
    assert_eq!(copy.vertices().len(), 4);
    assert_eq!(copy.anchor(), Vec2::new(-50.0, 0.0));
    assert_eq!(copy.color(), session.polygons()[1].color());
}

#[test]
fn test_copy_of_copy_chains_from_latest() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());
    run(
        &mut session,
        &mut colors,
        &[
            SessionCommand::Complete,
            SessionCommand::Move(Vec2::new(5.0, 5.0)),
            SessionCommand::Copy,
            SessionCommand::Move(Vec2::new(-2.0, 3.0)),
            SessionCommand::Copy,
        ],
    );

    assert_eq!(session.polygons().len(), 3);
    assert_eq!(
        session.polygons()[2].vertices(),
        &[Vec2::new(-2.0, 3.0), Vec2::new(-1.0, 3.0), Vec2::new(-1.0, 4.0)]
    );
}

#[test]
fn test_click_does_not_move_copy_anchor() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());
    run(
        &mut session,
        &mut colors,
        &[
            SessionCommand::Complete,
            SessionCommand::Move(Vec2::new(5.0, 5.0)),
            SessionCommand::Click(Vec2::new(30.0, 50.0)),
            SessionCommand::Copy,
        ],
    );

    assert_eq!(session.pointer_world_position(), Vec2::new(5.0, 5.0));
    assert_eq!(session.polygons()[1].anchor(), Vec2::new(5.0, 5.0));
    assert_eq!(session.draft().vertices(), &[Vec2::new(30.0, 50.0)]);
}

#[test]
fn test_copy_with_no_polygons_is_noop() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    session.dispatch(SessionCommand::Click(Vec2::new(1.0, 1.0)), &mut colors);
    let before = session.clone();

    let outcome = session.dispatch(SessionCommand::Copy, &mut colors);

    assert_eq!(outcome, CommandOutcome::Ignored(SessionError::EmptyPolygonSet));
    assert_eq!(session, before);
}

#[test]
fn test_copy_does_not_touch_draft() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());
    run(
        &mut session,
        &mut colors,
        &[
            SessionCommand::Complete,
            SessionCommand::Click(Vec2::new(7.0, 7.0)),
            SessionCommand::Copy,
        ],
    );

    assert_eq!(session.draft().vertices(), &[Vec2::new(7.0, 7.0)]);
    assert_eq!(session.polygons().len(), 2);
    assert_eq!(
        session.visibility(),
        UiVisibility {
            complete_visible: true,
            copy_visible: true,
        }
    );
}

#[test]
fn test_reset_clears_everything() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());
    run(
        &mut session,
        &mut colors,
        &[
            SessionCommand::Complete,
            SessionCommand::Click(Vec2::new(3.0, 3.0)),
            SessionCommand::Reset,
        ],
    );

    assert!(session.polygons().is_empty());
    assert_eq!(session.draft().state(), DraftState::Empty);
    assert_eq!(session.visibility(), UiVisibility::default());
    assert_eq!(session.frame().preview, None);
}

#[test]
fn test_reset_is_idempotent() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());
    session.dispatch(SessionCommand::Complete, &mut colors);

    session.dispatch(SessionCommand::Reset, &mut colors);
    let once = session.clone();
    session.dispatch(SessionCommand::Reset, &mut colors);
    assert_eq!(session, once);
}

#[test]
fn test_reset_bumps_generation_only_when_polygons_discarded() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();

    session.dispatch(SessionCommand::Reset, &mut colors);
    assert_eq!(session.generation(), 0);

    run(&mut session, &mut colors, &unit_triangle_clicks());
    session.dispatch(SessionCommand::Complete, &mut colors);
    session.dispatch(SessionCommand::Reset, &mut colors);
    assert_eq!(session.generation(), 1);
}

#[test]
fn test_preview_follows_pointer() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    session.dispatch(SessionCommand::Move(Vec2::new(9.0, 9.0)), &mut colors);
    assert_eq!(session.frame().preview, None);

    session.dispatch(SessionCommand::Click(Vec2::new(1.0, 2.0)), &mut colors);
    session.dispatch(SessionCommand::Move(Vec2::new(4.0, 6.0)), &mut colors);

    assert_eq!(
        session.frame().preview,
        Some(vec![Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0)])
    );
    assert_eq!(session.pointer_world_position(), Vec2::new(4.0, 6.0));
}

#[test]
fn test_move_does_not_change_geometry() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(&mut session, &mut colors, &unit_triangle_clicks());

    let outcome = session.dispatch(SessionCommand::Move(Vec2::new(100.0, 100.0)), &mut colors);

    assert_eq!(outcome, CommandOutcome::PointerMoved);
    assert_eq!(session.draft().vertex_count(), 3);
    assert!(session.polygons().is_empty());
}

#[test]
fn test_visibility_invariant_over_mixed_sequence() {
    let mut session = Session::default();
    let mut colors = FixedColors::default();
    run(
        &mut session,
        &mut colors,
        &[
            SessionCommand::Copy,
            SessionCommand::Complete,
            SessionCommand::Click(Vec2::new(0.0, 0.0)),
            SessionCommand::Complete,
            SessionCommand::Click(Vec2::new(2.0, 0.0)),
            SessionCommand::Click(Vec2::new(0.0, 2.0)),
            SessionCommand::Move(Vec2::new(8.0, 8.0)),
            SessionCommand::Complete,
            SessionCommand::Copy,
            SessionCommand::Click(Vec2::new(1.0, 1.0)),
            SessionCommand::Reset,
            SessionCommand::Reset,
            SessionCommand::Copy,
        ],
    );
}

#[test]
fn test_command_names() {
    assert_eq!(SessionCommand::Move(Vec2::ZERO).name(), "move");
    assert_eq!(SessionCommand::Click(Vec2::ZERO).name(), "click");
    assert_eq!(SessionCommand::Complete.name(), "complete");
    assert_eq!(SessionCommand::Copy.name(), "copy");
    assert_eq!(SessionCommand::Reset.name(), "reset");
}
