// Engine module - filtering, view construction and input control.
// Nothing here knows about a terminal: renderers return view trees and
// backends in the CLI materialize them.

pub mod card;
pub mod controller;
pub mod debounce;
pub mod filter;
pub mod list;
pub mod view;

pub use card::render_card;
pub use controller::{ControllerState, DEFAULT_DEBOUNCE, InputController};
pub use debounce::{Clock, Debouncer, SystemClock};
pub use filter::{filter, normalize_query};
pub use list::{Container, EMPTY_MESSAGE, Surface, build_list, render_list};
pub use view::{Action, Element, EventKind, Handler, Key, Node, Presentation, Tag};
