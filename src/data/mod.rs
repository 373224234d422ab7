//! Data layer: core types, parsing, clustering and plist output.
//!
//! Architecture:
//! ```text
//!   emoji-test.txt
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse lines → ParsedGroups (group → raw glyphs)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  cluster  │  glyphs → Entry (plain or skin-tone cluster)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  schema   │  canonical ordering → Catalog → .plist
//!   └──────────┘
//! ```

pub mod cluster;
pub mod loader;
pub mod model;
pub mod schema;
