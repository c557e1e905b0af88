use serde::Serialize;

/// Visual tone of a badge or status element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
	#[default]
	Neutral,
	Success,
	Warning,
	Danger,
}

impl Tone {
	/// Picks a tone for a free-form status label.
	///
	/// Unrecognized statuses are neutral.
	pub fn for_status(status: &str) -> Self {
		match status.trim().to_ascii_lowercase().as_str() {
			"active" | "done" | "complete" | "completed" | "won" | "healthy" => Self::Success,
			"pending" | "review" | "in progress" | "at risk" | "paused" => Self::Warning,
			"failed" | "lost" | "blocked" | "cancelled" | "overdue" => Self::Danger,
			_ => Self::Neutral,
		}
	}

	pub const fn label(self) -> &'static str {
		match self {
			Self::Neutral => "neutral",
			Self::Success => "success",
			Self::Warning => "warning",
			Self::Danger => "danger",
		}
	}
}

/// Declarative view tree.
///
/// Components and the presentation shell produce values of this type;
/// frontends decide how to draw them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
	/// Renders nothing.
	#[default]
	Empty,
	/// Plain paragraph text.
	Text { text: String },
	/// Section heading.
	Heading { text: String },
	/// Loading indicator. Carries no interactive content.
	Spinner { label: String },
	/// Error panel with a title and a human-readable message.
	ErrorPanel { title: String, message: String },
	/// Titled container.
	Panel { title: String, children: Vec<View> },
	/// Short status label.
	Badge { label: String, tone: Tone },
	/// Labelled progress bar, percent in `0..=100`.
	Progress { label: String, percent: u8 },
	/// Vertical stack of children.
	Column { children: Vec<View> },
	/// Navigation menu: titled sections of `(item id, label)` entries.
	Menu { title: String, sections: Vec<(String, Vec<(String, String)>)> },
}

impl View {
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text { text: text.into() }
	}

	pub fn heading(text: impl Into<String>) -> Self {
		Self::Heading { text: text.into() }
	}

	pub fn spinner(label: impl Into<String>) -> Self {
		Self::Spinner { label: label.into() }
	}

	pub fn error_panel(title: impl Into<String>, message: impl Into<String>) -> Self {
		Self::ErrorPanel {
			title: title.into(),
			message: message.into(),
		}
	}

	pub fn panel(title: impl Into<String>, children: Vec<View>) -> Self {
		Self::Panel {
			title: title.into(),
			children,
		}
	}

	pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
		Self::Badge { label: label.into(), tone }
	}

	/// Status badge whose tone is derived from the label.
	pub fn status_badge(status: impl Into<String>) -> Self {
		let label = status.into();
		let tone = Tone::for_status(&label);
		Self::Badge { label, tone }
	}

	/// Progress bar; `percent` is clamped to `0..=100`.
	pub fn progress(label: impl Into<String>, percent: i64) -> Self {
		Self::Progress {
			label: label.into(),
			percent: percent.clamp(0, 100) as u8,
		}
	}

	pub fn column(children: Vec<View>) -> Self {
		Self::Column { children }
	}

	/// Returns true if this view or any descendant can receive user input.
	///
	/// Spinners, error panels and static text never can; menus always do.
	pub fn is_interactive(&self) -> bool {
		match self {
			Self::Menu { .. } => true,
			Self::Panel { children, .. } | Self::Column { children } => children.iter().any(View::is_interactive),
			_ => false,
		}
	}
}
