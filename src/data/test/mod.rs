mod alert;
mod arrest;
mod company;
mod economy;
mod ine;
mod news;
mod oauth_state;
mod role_config;
mod session;
mod staff;
mod user;
