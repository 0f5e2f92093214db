//! Application Layer - Use Cases

pub mod analytics;
pub mod comments;
pub mod config;
pub mod dashboard;
pub mod subscribe;
pub mod subscribers;
pub mod unsubscribe;

pub use analytics::{
    GetPostStatsUseCase, ListPostAnalyticsUseCase, PostStatsOutput, RecordViewUseCase,
    ToggleLikeUseCase,
};
pub use comments::{
    CreateCommentInput, CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase,
};
pub use config::EngagementConfig;
pub use dashboard::{
    DashboardStats, DashboardStatsUseCase, ListAdminCommentsUseCase, PostTitles, TitledAnalytics,
    TitledComment,
};
pub use subscribe::{SubscribeInput, SubscribeUseCase};
pub use subscribers::{DeleteSubscriberUseCase, ListSubscribersUseCase, SubscriberListOutput};
pub use unsubscribe::{UnsubscribeOutcome, UnsubscribeUseCase};
