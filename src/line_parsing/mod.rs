pub mod kill_fact;
pub mod line_kind;
pub mod means_of_death;
pub mod player_name;
