//! Domain model (IDs, application, instances, routes, summary, errors).

pub mod application;
pub mod errors;
pub mod ids;
pub mod instance;
pub mod route;
pub mod summary;
pub mod warnings;

pub use self::application::{Application, ApplicationState};
pub use self::errors::{ActionError, ClientError, SummaryError};
pub use self::ids::{ApplicationGuid, Guid, RouteGuid, SpaceGuid, StackGuid};
pub use self::instance::{
    ApplicationInstanceState, ApplicationInstanceWithStats, InstanceRuntimeInfo, InstanceStatus,
};
pub use self::route::{Route, Stack};
pub use self::summary::ApplicationSummary;
pub use self::warnings::{Warned, Warnings};
