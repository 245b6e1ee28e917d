pub mod espn;
pub mod kickoff;
pub mod matchcenter;
pub mod models;
pub mod render;
pub mod resolver;
pub mod teams;

pub use kickoff::KickoffTimes;
pub use models::{GameInfo, Gamethread, MatchInfo, Record};
pub use resolver::GameInfoResolver;
pub use teams::{Division, Roster, Team};
