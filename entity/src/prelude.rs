pub use super::arrest_entry::Entity as ArrestEntry;
pub use super::arrest_record::Entity as ArrestRecord;
pub use super::company_request::Entity as CompanyRequest;
pub use super::economy_account::Entity as EconomyAccount;
pub use super::identity_document::Entity as IdentityDocument;
pub use super::news_post::Entity as NewsPost;
pub use super::oauth_state::Entity as OauthState;
pub use super::role_config::Entity as RoleConfig;
pub use super::server_alert::Entity as ServerAlert;
pub use super::session::Entity as Session;
pub use super::staff_note::Entity as StaffNote;
pub use super::staff_profile::Entity as StaffProfile;
pub use super::staff_warning::Entity as StaffWarning;
pub use super::user::Entity as User;
