// src/services/user_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        page::{PageRequest, PageResponse},
        user::{
            AdminDashboard, EducatorDashboard, NewUser, ProfileUpdate, ProfileUpdateRequest,
            SignupRequest, User,
        },
    },
    repositories::{CategoryRepository, QuestionRepository, QuizRepository, UserRepository},
    services::Requester,
    utils::hash,
};

/// Own-profile management, dashboards and admin-side user moderation.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    categories: Arc<dyn CategoryRepository>,
    quizzes: Arc<dyn QuizRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        categories: Arc<dyn CategoryRepository>,
        quizzes: Arc<dyn QuizRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            users,
            categories,
            quizzes,
            questions,
        }
    }

    /// The requester's own account. A blocked account reports as blocked.
    pub async fn profile(&self, requester: &Requester) -> AppResult<User> {
        let user = self.find(requester.user_id).await?;
        if user.is_deleted {
            return Err(AppError::Blocked);
        }
        Ok(user)
    }

    /// Edits the requester's name, picture, bio and education, and the
    /// password when one is supplied.
    pub async fn update_profile(
        &self,
        requester: &Requester,
        request: ProfileUpdateRequest,
    ) -> AppResult<User> {
        request.validate()?;

        let password_hash = match request.password.as_deref() {
            Some(password) => Some(hash::hash_password(password)?),
            None => None,
        };

        let user = self
            .users
            .update_profile(
                requester.user_id,
                &ProfileUpdate {
                    name: request.name,
                    password_hash,
                    profile_pic: request.profile_pic,
                    bio: request.bio,
                    education: request.education,
                },
            )
            .await?
            .ok_or(AppError::Blocked)?;

        tracing::info!("User {} updated their profile", user.id);
        Ok(user)
    }

    /// Creates an account of any role on an admin's behalf. It is approved at once.
    pub async fn create(&self, admin: &Requester, request: SignupRequest) -> AppResult<User> {
        request.validate()?;

        if self.users.exists_by_email(&request.email).await? {
            return Err(AppError::Conflict(
                "User already exists with this email".to_string(),
            ));
        }

        let password_hash = hash::hash_password(&request.password)?;
        let user = self
            .users
            .create(&NewUser {
                name: request.name,
                email: request.email,
                password_hash,
                role: request.role,
                is_approved: true,
                profile_pic: request.profile_pic,
                bio: request.bio,
                education: request.education,
            })
            .await?;

        tracing::info!(
            "User {} created as {} by admin {}",
            user.id,
            user.role.as_str(),
            admin.user_id
        );
        Ok(user)
    }

    /// Live quizzes the requester authored and the live questions in them.
    pub async fn educator_dashboard(&self, requester: &Requester) -> AppResult<EducatorDashboard> {
        Ok(EducatorDashboard {
            total_quiz: self.quizzes.count_live_by_creator(requester.user_id).await?,
            total_question: self.questions.count_live_by_creator(requester.user_id).await?,
        })
    }

    pub async fn admin_dashboard(&self) -> AppResult<AdminDashboard> {
        Ok(AdminDashboard {
            total_category: self.categories.count_live().await?,
            total_user: self.users.count_live().await?,
        })
    }

    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<User>> {
        let (users, total) = self.users.list(page).await?;
        Ok(PageResponse::new(users, page.page, page.size, total))
    }

    pub async fn approve(&self, id: i64) -> AppResult<User> {
        if !self.users.set_approved(id, true).await? {
            return Err(user_not_found(id));
        }
        tracing::info!("User {} approved", id);
        self.find(id).await
    }

    /// Soft-deletes the account so that login reports it as blocked.
    pub async fn block(&self, admin: &Requester, id: i64) -> AppResult<User> {
        if admin.user_id == id {
            return Err(AppError::BadRequest("You cannot block yourself".to_string()));
        }
        if !self.users.set_deleted(id, true).await? {
            return Err(user_not_found(id));
        }
        tracing::info!("User {} blocked by admin {}", id, admin.user_id);
        self.find(id).await
    }

    pub async fn unblock(&self, admin: &Requester, id: i64) -> AppResult<User> {
        if !self.users.set_deleted(id, false).await? {
            return Err(user_not_found(id));
        }
        tracing::info!("User {} unblocked by admin {}", id, admin.user_id);
        self.find(id).await
    }

    async fn find(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }
}

fn user_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("User not found with the id {id}"))
}
