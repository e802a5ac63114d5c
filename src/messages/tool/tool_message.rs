use crate::messages::tool::common_functionality::snapping::Rect;

#[derive(PartialEq, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum ToolMessage {
	AbortDrag,
	/// Begins a drag session. `target` is the dragged shape's current footprint, or
	/// `None` when the shape comes from outside the panel and has no footprint yet.
	DragStart { target: Option<Rect> },
	EndDrag,
	PointerMove,
	/// Replaces the set of stationary shapes the dragged shape can align against.
	SetSiblings { siblings: Vec<Rect> },
	/// Updates the dragged shape's footprint as the host moves it.
	UpdateDragTarget { target: Rect },
}
