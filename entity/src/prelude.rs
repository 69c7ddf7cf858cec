pub use super::appointments::Entity as Appointments;
pub use super::customers::Entity as Customers;
pub use super::employees::Entity as Employees;
pub use super::packages::Entity as Packages;
pub use super::services::Entity as Services;
pub use super::social_accounts::Entity as SocialAccounts;
pub use super::social_posts::Entity as SocialPosts;
pub use super::social_reviews::Entity as SocialReviews;
pub use super::tenants::Entity as Tenants;
pub use super::users::Entity as Users;
pub use super::waitlist_entries::Entity as WaitlistEntries;
