//! Composite dashboard view DTOs.
//!
//! Each view bundles the results of several independent backend reads into a
//! single response payload so a dashboard page renders from one request.

use domain::appointments::Model as AppointmentModel;
use domain::customers::Model as CustomerModel;
use domain::employees::Model as EmployeeModel;
use domain::packages::Model as PackageModel;
use domain::services::Model as ServiceModel;
use domain::waitlist_entries::Model as WaitlistEntryModel;
use serde::Serialize;
use utoipa::ToSchema;

/// Everything the calendar page needs for one tenant and date window.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalendarView {
    pub appointments: Vec<AppointmentModel>,
    pub employees: Vec<EmployeeModel>,
    pub services: Vec<ServiceModel>,
}

/// The waitlist page: entries plus the customers and services they refer to.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WaitlistView {
    pub entries: Vec<WaitlistEntryModel>,
    pub customers: Vec<CustomerModel>,
    pub services: Vec<ServiceModel>,
}

/// The packages page: the tenant's packages alongside its service catalog.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PackagesView {
    pub packages: Vec<PackageModel>,
    pub services: Vec<ServiceModel>,
}
