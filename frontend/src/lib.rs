pub mod config;
pub mod content;
pub mod hooks;
pub mod signup;

pub mod state {
    pub mod carousel;
    pub mod email;
    pub mod particles;
    pub mod playback;
    pub mod visibility;
}

pub mod components {
    pub mod call_to_action;
    pub mod characters;
    pub mod footer;
    pub mod gameplay;
    pub mod hero;
    pub mod particles;
    pub mod platforms;
    pub mod signup_form;
    pub mod story;
    pub mod theme;
}

pub mod pages {
    pub mod home;
}
