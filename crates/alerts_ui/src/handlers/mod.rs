//! Handler modules for the application's business logic.
//!
//! Each module extends [`crate::app::App`] with the handlers for one part
//! of the workflow; `dialogs` holds the shared rfd notice helpers.

mod create;
mod dialogs;
mod drain;
mod tick;
