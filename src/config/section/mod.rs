//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docpub.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `publish` | `[publish]`  | Files, commit message, remote, branches |
//! | `pages`   | `[pages]`    | Hosting follow-up instructions       |

mod pages;
mod publish;

pub use pages::PagesSection;
pub use publish::PublishSection;
