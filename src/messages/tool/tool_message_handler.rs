use crate::config::EditorConfig;
use crate::consts::NO_SNAP;
use crate::messages::guides::guide_message_handler::GuideMessageHandler;
use crate::messages::guides::utility_types::GuideAxis;
use crate::messages::navigation::utility_types::{ViewState, round_half_up};
use crate::messages::prelude::*;
use crate::messages::tool::common_functionality::snapping::{Rect, SnapContext, SnapDirective, compute_snap};

use glam::DVec2;

pub struct ToolMessageContext<'a> {
	pub config: &'a EditorConfig,
	pub ipp: &'a InputPreprocessorMessageHandler,
	pub view: &'a ViewState,
	pub guides: &'a GuideMessageHandler,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum DragState {
	#[default]
	Idle,
	Dragging {
		/// Current footprint of the dragged shape, `None` for a drop from outside.
		target: Option<Rect>,
		/// Footprint at drag start, drawn as a ghost while the drag is live.
		original: Option<Rect>,
	},
}

/// Drives the drag session: owns the drag state machine and the sibling list, and on
/// every pointer move during a drag runs the snap pass and publishes its outcome.
///
/// The chasing callback fires once per transition — every match republishes the snapped
/// position, but losing all matches reports the sentinel a single time and then switches
/// to the crosshair readout until the next match or the end of the drag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolMessageHandler {
	drag_state: DragState,
	siblings: Vec<Rect>,
	chase_ended: bool,
}

impl MessageHandler<ToolMessage, ToolMessageContext<'_>> for ToolMessageHandler {
	fn process_message(&mut self, message: ToolMessage, responses: &mut VecDeque<Message>, context: ToolMessageContext) {
		let ToolMessageContext { config, ipp, view, guides } = context;

		match message {
			ToolMessage::AbortDrag => {
				self.drag_state = DragState::Idle;
				self.chase_ended = false;
				responses.add(FrontendMessage::UpdateChasingPosition { left: NO_SNAP, top: NO_SNAP });
				responses.add(FrontendMessage::UpdateSnapOverlay { directives: Vec::new() });
			}
			ToolMessage::DragStart { target } => {
				self.drag_state = DragState::Dragging { target, original: target };
				self.chase_ended = false;
			}
			ToolMessage::EndDrag => {
				if self.drag_state == DragState::Idle {
					return;
				}
				let drop = view.screen_to_logical(ipp.mouse_position, ipp.viewport_offset(), ipp.start_margin_zoom);
				responses.add(FrontendMessage::TriggerDropCompleted {
					left: drop.x,
					top: drop.y,
					unit: view.unit,
				});

				self.drag_state = DragState::Idle;
				self.chase_ended = false;
				responses.add(FrontendMessage::UpdateSnapOverlay { directives: Vec::new() });
			}
			ToolMessage::PointerMove => {
				let DragState::Dragging { target, original } = self.drag_state else {
					return;
				};

				let origin = ipp.page_origin();
				let mouse = ipp.mouse_position;
				if mouse.x < origin.x || mouse.y < origin.y || mouse.x > origin.x + view.zoom_page_width || mouse.y > origin.y + view.zoom_page_height {
					responses.add(FrontendMessage::UpdateSnapOverlay { directives: Vec::new() });
					return;
				}

				let moving = match target {
					Some(rect) => rect,
					None => {
						let logical = view.screen_to_logical(mouse, ipp.viewport_offset(), ipp.start_margin_zoom);
						Rect::new(logical.x, logical.y, 0., 0.)
					}
				};

				let mut directives = Vec::new();
				if let (Some(_), Some(ghost)) = (target, original) {
					directives.push(SnapDirective::OriginalPosition { rect: ghost });
				}

				let snap_context = SnapContext {
					page: DVec2::new(config.screen_width, config.screen_height),
					x_guides: guides.guides(GuideAxis::X).positions(),
					y_guides: guides.guides(GuideAxis::Y).positions(),
					siblings: &self.siblings,
					unit: view.unit,
				};
				let (result, snap_directives) = compute_snap(moving, &snap_context);
				directives.extend(snap_directives);

				if !result.is_no_match() {
					self.chase_ended = false;
					responses.add(FrontendMessage::UpdateChasingPosition {
						left: round_half_up(result.left),
						top: round_half_up(result.top),
					});
				} else if !self.chase_ended {
					self.chase_ended = true;
					responses.add(FrontendMessage::UpdateChasingPosition { left: result.left, top: result.top });
				} else {
					directives.push(SnapDirective::Crosshair {
						position: DVec2::new(round_half_up(moving.left), round_half_up(moving.top)),
					});
				}

				responses.add(FrontendMessage::UpdateSnapOverlay { directives });
			}
			ToolMessage::SetSiblings { siblings } => {
				self.siblings = siblings;
			}
			ToolMessage::UpdateDragTarget { target } => {
				if let DragState::Dragging { target: current, .. } = &mut self.drag_state {
					*current = Some(target);
				}
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::messages::input_preprocessor::utility_types::ViewportBounds;

	struct Session {
		config: EditorConfig,
		ipp: InputPreprocessorMessageHandler,
		view: ViewState,
		guides: GuideMessageHandler,
	}

	impl Session {
		fn new() -> Self {
			let config = EditorConfig::default();
			let mut view = ViewState::default();
			view.set_zoom(100., &config);

			let mut ipp = InputPreprocessorMessageHandler::default();
			let mut responses = VecDeque::new();
			ipp.process_message(
				InputPreprocessorMessage::BoundsOfViewport {
					bounds: ViewportBounds {
						left: 0.,
						top: 0.,
						width: 1280.,
						height: 720.,
						device_pixel_ratio: 1.,
					},
				},
				&mut responses,
				InputPreprocessorMessageContext { config: &config },
			);
			Self {
				config,
				ipp,
				view,
				guides: GuideMessageHandler::default(),
			}
		}

		fn context(&self) -> ToolMessageContext<'_> {
			ToolMessageContext {
				config: &self.config,
				ipp: &self.ipp,
				view: &self.view,
				guides: &self.guides,
			}
		}
	}

	fn chasing_positions(responses: &VecDeque<Message>) -> Vec<(f64, f64)> {
		responses
			.iter()
			.filter_map(|message| match message {
				Message::Frontend(FrontendMessage::UpdateChasingPosition { left, top }) => Some((*left, *top)),
				_ => None,
			})
			.collect()
	}

	fn last_overlay(responses: &VecDeque<Message>) -> Option<&Vec<SnapDirective>> {
		responses
			.iter()
			.rev()
			.find_map(|message| match message {
				Message::Frontend(FrontendMessage::UpdateSnapOverlay { directives }) => Some(directives),
				_ => None,
			})
	}

	#[test]
	fn pointer_move_outside_a_drag_is_ignored() {
		let session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(ToolMessage::PointerMove, &mut responses, session.context());

		assert!(responses.is_empty());
	}

	#[test]
	fn pointer_outside_the_page_clears_the_overlay() {
		let mut session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(ToolMessage::DragStart { target: None }, &mut responses, session.context());
		// The page area starts at (60, 60) with the default margins.
		session.ipp.mouse_position = DVec2::new(10., 10.);
		tool.process_message(ToolMessage::PointerMove, &mut responses, session.context());

		assert_eq!(last_overlay(&responses), Some(&Vec::new()));
		assert!(chasing_positions(&responses).is_empty());
	}

	#[test]
	fn matching_drag_publishes_the_snapped_position() {
		let mut session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(
			ToolMessage::DragStart {
				target: Some(Rect::new(1., 500., 50., 50.)),
			},
			&mut responses,
			session.context(),
		);
		session.ipp.mouse_position = DVec2::new(200., 200.);
		tool.process_message(ToolMessage::PointerMove, &mut responses, session.context());

		assert_eq!(chasing_positions(&responses), vec![(0., -1.)]);
		let overlay = last_overlay(&responses).unwrap();
		assert!(matches!(overlay[0], SnapDirective::OriginalPosition { .. }));
		assert!(matches!(overlay[1], SnapDirective::PageEdge { .. }));
	}

	#[test]
	fn losing_all_matches_fires_the_sentinel_once_then_shows_the_crosshair() {
		let mut session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(
			ToolMessage::DragStart {
				target: Some(Rect::new(321., 417., 50., 50.)),
			},
			&mut responses,
			session.context(),
		);
		session.ipp.mouse_position = DVec2::new(200., 200.);

		tool.process_message(ToolMessage::PointerMove, &mut responses, session.context());
		assert_eq!(chasing_positions(&responses), vec![(-1., -1.)]);

		tool.process_message(ToolMessage::PointerMove, &mut responses, session.context());
		assert_eq!(chasing_positions(&responses), vec![(-1., -1.)], "the sentinel must not repeat");
		let overlay = last_overlay(&responses).unwrap();
		assert!(matches!(overlay.last(), Some(SnapDirective::Crosshair { position }) if *position == DVec2::new(321., 417.)));
	}

	#[test]
	fn regaining_a_match_resumes_chasing() {
		let mut session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(
			ToolMessage::DragStart {
				target: Some(Rect::new(321., 417., 50., 50.)),
			},
			&mut responses,
			session.context(),
		);
		session.ipp.mouse_position = DVec2::new(200., 200.);
		tool.process_message(ToolMessage::PointerMove, &mut responses, session.context());
		tool.process_message(
			ToolMessage::UpdateDragTarget {
				target: Rect::new(1., 417., 50., 50.),
			},
			&mut responses,
			session.context(),
		);
		tool.process_message(ToolMessage::PointerMove, &mut responses, session.context());

		assert_eq!(chasing_positions(&responses), vec![(-1., -1.), (0., -1.)]);
	}

	#[test]
	fn drop_from_outside_tracks_the_pointer() {
		let mut session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(ToolMessage::DragStart { target: None }, &mut responses, session.context());
		// (61, 60) is one pixel past the page origin: logical (1, 0) at unit 1.
		session.ipp.mouse_position = DVec2::new(61., 60.);
		tool.process_message(ToolMessage::PointerMove, &mut responses, session.context());

		assert_eq!(chasing_positions(&responses), vec![(0., 0.)]);
		// No drag target means no ghost in the overlay.
		let overlay = last_overlay(&responses).unwrap();
		assert!(!overlay.iter().any(|directive| matches!(directive, SnapDirective::OriginalPosition { .. })));
	}

	#[test]
	fn end_drag_reports_the_drop_in_logical_coordinates() {
		let mut session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(ToolMessage::DragStart { target: None }, &mut responses, session.context());
		session.ipp.mouse_position = DVec2::new(260., 160.);
		tool.process_message(ToolMessage::EndDrag, &mut responses, session.context());

		// (260 - 20 - 40) × 1 and (160 - 20 - 40) × 1.
		assert!(responses.iter().any(|message| matches!(
			message,
			Message::Frontend(FrontendMessage::TriggerDropCompleted { left, top, unit }) if *left == 200. && *top == 100. && *unit == 1.
		)));

		// The drag is over: further pointer moves do nothing.
		let mut after = VecDeque::new();
		tool.process_message(ToolMessage::PointerMove, &mut after, session.context());
		assert!(after.is_empty());
	}

	#[test]
	fn end_drag_without_a_drag_is_ignored() {
		let session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(ToolMessage::EndDrag, &mut responses, session.context());

		assert!(responses.is_empty());
	}

	#[test]
	fn sibling_alignment_uses_the_registered_list() {
		let mut session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(
			ToolMessage::SetSiblings {
				siblings: vec![Rect::new(100., 100., 50., 40.)],
			},
			&mut responses,
			session.context(),
		);
		tool.process_message(
			ToolMessage::DragStart {
				target: Some(Rect::new(149., 300., 60., 60.)),
			},
			&mut responses,
			session.context(),
		);
		session.ipp.mouse_position = DVec2::new(200., 200.);
		tool.process_message(ToolMessage::PointerMove, &mut responses, session.context());

		assert_eq!(chasing_positions(&responses), vec![(150., -1.)]);
		let overlay = last_overlay(&responses).unwrap();
		assert!(overlay.iter().any(|directive| matches!(directive, SnapDirective::SiblingHighlight { .. })));
	}

	#[test]
	fn abort_resets_the_session() {
		let mut session = Session::new();
		let mut tool = ToolMessageHandler::default();
		let mut responses = VecDeque::new();

		tool.process_message(
			ToolMessage::DragStart {
				target: Some(Rect::new(1., 500., 50., 50.)),
			},
			&mut responses,
			session.context(),
		);
		session.ipp.mouse_position = DVec2::new(200., 200.);
		tool.process_message(ToolMessage::AbortDrag, &mut responses, session.context());

		assert_eq!(chasing_positions(&responses), vec![(-1., -1.)]);
		assert_eq!(last_overlay(&responses), Some(&Vec::new()));

		let mut after = VecDeque::new();
		tool.process_message(ToolMessage::PointerMove, &mut after, session.context());
		assert!(after.is_empty());
	}
}
