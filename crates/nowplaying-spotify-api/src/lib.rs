pub mod access_token;
pub mod client;
pub mod credentials;
pub mod fetch;
pub mod get_currently_playing;
pub mod playback;
pub mod track;
pub mod auth {
    pub mod consent;
    pub mod token;
}
