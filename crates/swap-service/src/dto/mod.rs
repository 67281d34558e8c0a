//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateFeedbackRequest, CreateSkillRequest, CreateSwapRequest, CreateUserSkillRequest,
    ExportQuery, LoginRequest, RefreshTokenRequest, RegisterRequest, SkillSearchQuery,
    StatusFilterQuery, SwapListQuery, UpdateProfileRequest, UpdateSkillRequest,
    UpdateSwapStatusRequest, UpdateUserSkillRequest, UserSearchQuery, UserSkillQuery,
};

pub use responses::{
    AccountResponse, AuthResponse, CsvExport, FeedbackResponse, HealthChecks, HealthResponse,
    ProfileResponse, PublicProfileResponse, ReadinessResponse, SkillResponse, StatusResponse,
    SwapRequestResponse, UserSkillInfoResponse, UserSkillResponse,
};

pub use mappers::map_all;
