//! UI Components
//!
//! Leptos components for the contact desk.

mod activity_panel;
mod contact_detail;
mod contact_header;
mod conversations_panel;
mod field_renderer;
mod filter_bar;
mod folder_renderer;
mod layout_switcher;
mod notes_panel;
mod tasks_panel;

pub use contact_detail::ContactDetail;
pub use contact_header::ContactHeader;
pub use conversations_panel::ConversationsPanel;
pub use field_renderer::FieldRenderer;
pub use filter_bar::FilterBar;
pub use folder_renderer::FolderRenderer;
pub use layout_switcher::LayoutSwitcher;
pub use notes_panel::NotesPanel;
pub use tasks_panel::TasksPanel;
