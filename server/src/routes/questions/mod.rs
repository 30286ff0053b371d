mod create;
mod delete;
mod detail;
mod index;
mod results;
mod vote;

pub use self::create::*;
pub use self::delete::*;
pub use self::detail::*;
pub use self::index::*;
pub use self::results::*;
pub use self::vote::*;
