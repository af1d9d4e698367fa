pub use super::game::Entity as Game;
pub use super::player::Entity as Player;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_team::Entity as TournamentTeam;
pub use super::transfer::Entity as Transfer;
