//! Plain-text rendering of `ClientState`.
//!
//! The view is a pure function of the state so the frontend only has to
//! print it. Controls that would start a second request while one is in
//! flight are shown disabled.

use std::fmt;

use crate::state::ClientState;

pub const TITLE: &str = "Simple Board";
pub const LOADING_LINE: &str = "Loading...";
pub const EMPTY_LINE: &str = "No posts yet.";

/// A control label, marked when it cannot be used right now.
struct Control<'a> {
    label: &'a str,
    enabled: bool,
}

impl fmt::Display for Control<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "[{}]", self.label)
        } else {
            write!(f, "[{} (disabled)]", self.label)
        }
    }
}

fn control(label: &str, enabled: bool) -> Control<'_> {
    Control { label, enabled }
}

/// The board view of one state, printable with `{}`.
pub struct View<'a>(pub &'a ClientState);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        let idle = !state.loading;

        writeln!(f, "{TITLE}")?;
        writeln!(f, "{}", "=".repeat(TITLE.len()))?;
        writeln!(
            f,
            "> {} {}",
            state.compose_text,
            control("post", idle && !state.compose_text.trim().is_empty())
        )?;

        if state.loading {
            writeln!(f, "{LOADING_LINE}")?;
        }
        if let Some(error) = &state.error {
            writeln!(f, "! {error}")?;
        }

        writeln!(f, "---")?;
        writeln!(f, "Posts")?;
        if state.posts.is_empty() {
            writeln!(f, "{EMPTY_LINE}")?;
        }
        for post in &state.posts {
            if state.is_editing(&post.id) {
                writeln!(
                    f,
                    "#{} * {} {} {}",
                    post.id,
                    state.editing_text,
                    control("save", idle),
                    control("cancel", true)
                )?;
            } else {
                writeln!(
                    f,
                    "#{}   {} {} {}",
                    post.id,
                    post.text,
                    control("edit", idle),
                    control("delete", idle)
                )?;
            }
        }
        Ok(())
    }
}

/// Render the whole board view.
pub fn render(state: &ClientState) -> String {
    View(state).to_string()
}
