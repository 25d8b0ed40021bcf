mod all;
mod footer;
mod input;
mod list;
mod log;

use self::log::log;
use super::*;
use footer::footer;
use input::input;
use list::list;

pub use all::all as render;
