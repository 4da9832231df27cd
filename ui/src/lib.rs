//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{use_services, use_session, Services, SessionProvider, SessionState};

mod navbar;
pub use navbar::Navbar;

mod dialog;
pub use dialog::{ModalOverlay, OkCancelDialog, OkDialog};

mod login_dialog;
pub use login_dialog::LoginDialog;

mod register_dialog;
pub use register_dialog::RegisterDialog;

mod add_link_dialog;
pub use add_link_dialog::AddLinkDialog;

mod link_table;
pub use link_table::LinkTable;
