// src/test_utils.rs

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{
        bookmark::Bookmark,
        category::Category,
        page::PageRequest,
        question::{Question, QuestionOption, QuestionRequest},
        quiz::{Quiz, QuizDraft, QuizFilter, QuizListing, QuizSortField, Severity, SortDirection},
        result::{NewResult, QuizResult},
        user::{NewUser, ProfileUpdate, Role, User},
    },
    repositories::{
        BookmarkRepository, CategoryRepository, QuestionRepository, QuizRepository,
        ResultRepository, UserRepository,
    },
    utils::hash,
};

/// Argon2 is slow in debug builds, so every fixture user shares one hash.
static FIXTURE_PASSWORD_HASH: LazyLock<String> =
    LazyLock::new(|| hash::hash_password("secret123").unwrap());

/// In-memory stand-in for Postgres implementing every repository trait.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: Vec<User>,
    categories: Vec<Category>,
    quizzes: Vec<Quiz>,
    questions: Vec<Question>,
    options: Vec<QuestionOption>,
    results: Vec<QuizResult>,
    bookmarks: Vec<Bookmark>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn insert_options(&mut self, question_id: i64, request: &QuestionRequest) -> Vec<QuestionOption> {
        let now = Some(Utc::now());
        let mut options = Vec::with_capacity(request.options.len());
        for option in &request.options {
            let created = QuestionOption {
                id: self.next_id(),
                question_id,
                text: option.text.clone(),
                is_correct: option.is_correct,
                option_pic: option.option_pic.clone(),
                is_deleted: false,
                created_at: now,
                updated_at: now,
            };
            self.options.push(created.clone());
            options.push(created);
        }
        options
    }

    fn listing(&self, quiz: &Quiz) -> QuizListing {
        let category_name = self
            .categories
            .iter()
            .find(|c| c.id == quiz.category_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        let creator_name = self
            .users
            .iter()
            .find(|u| u.id == quiz.creator_id)
            .map(|u| u.name.clone())
            .unwrap_or_default();
        let question_count = self
            .questions
            .iter()
            .filter(|q| q.quiz_id == quiz.id && !q.is_deleted)
            .count() as i64;

        QuizListing {
            quiz: quiz.clone(),
            category_name,
            creator_name,
            question_count,
        }
    }
}

fn page_of<T: Clone>(rows: &[T], offset: i64, size: i64) -> Vec<T> {
    rows.iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(size as usize)
        .cloned()
        .collect()
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Beginner => 0,
        Severity::Medium => 1,
        Severity::Hard => 2,
    }
}

fn compare_field(a: &Quiz, b: &Quiz, field: QuizSortField) -> Ordering {
    match field {
        QuizSortField::Id => a.id.cmp(&b.id),
        QuizSortField::Title => a.title.cmp(&b.title),
        QuizSortField::Description => a.description.cmp(&b.description),
        QuizSortField::TimeLimit => a.time_limit.cmp(&b.time_limit),
        QuizSortField::Pass => a.pass.cmp(&b.pass),
        QuizSortField::Severity => severity_rank(a.severity).cmp(&severity_rank(b.severity)),
        QuizSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        QuizSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

fn matches_filter(quiz: &Quiz, f: &QuizFilter) -> bool {
    if quiz.is_deleted {
        return false;
    }
    if f.creator_id.is_some_and(|id| quiz.creator_id != id) {
        return false;
    }
    if f.severity.is_some_and(|s| quiz.severity != s) {
        return false;
    }
    if let (Some(from), Some(created)) = (f.created_from, quiz.created_at) {
        if created < from {
            return false;
        }
    }
    if let (Some(to), Some(created)) = (f.created_to, quiz.created_at) {
        if created > to {
            return false;
        }
    }
    if let Some(query) = &f.query {
        let needle = query.to_lowercase();
        if !quiz.title.to_lowercase().contains(&needle)
            && !quiz.description.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    if f.category_id.is_some_and(|id| quiz.category_id != id) {
        return false;
    }
    if f.max_time_limit.is_some_and(|max| quiz.time_limit > max) {
        return false;
    }
    if f.max_pass.is_some_and(|max| quiz.pass > max) {
        return false;
    }
    if f.randomize_questions.is_some_and(|r| quiz.randomize_questions != r) {
        return false;
    }
    true
}

impl MemoryStore {
    /// Inserts a user whose password is `secret123`.
    pub async fn add_user(&self, name: &str, email: &str, role: Role, approved: bool, deleted: bool) -> User {
        let mut t = self.tables.write().await;
        let now = Some(Utc::now());
        let user = User {
            id: t.next_id(),
            name: name.to_string(),
            email: email.to_string(),
            password: FIXTURE_PASSWORD_HASH.clone(),
            role,
            is_approved: approved,
            is_deleted: deleted,
            profile_pic: None,
            bio: None,
            education: None,
            created_at: now,
            updated_at: now,
        };
        t.users.push(user.clone());
        user
    }

    pub async fn add_category(&self, name: &str, creator_id: i64) -> i64 {
        CategoryRepository::create(self, creator_id, name, "A category for testing", None)
            .await
            .unwrap()
            .id
    }

    /// Inserts a Beginner quiz with a five minute limit and a 60% pass mark.
    pub async fn add_quiz(&self, title: &str, category_id: i64, creator_id: i64) -> i64 {
        let draft = QuizDraft {
            title: title.to_string(),
            description: "A quiz used in tests".to_string(),
            quiz_pic: None,
            time_limit: 300,
            pass: 60,
            randomize_questions: false,
            severity: Severity::Beginner,
            category_id,
        };
        QuizRepository::create(self, creator_id, &draft).await.unwrap().id
    }

    pub async fn add_result(&self, user_id: i64, quiz_id: i64) {
        ResultRepository::create(
            self,
            &NewResult {
                user_id,
                quiz_id,
                score: 5,
                total_score: 10,
                correct_answers: 1,
                incorrect_answers: 1,
                total_question: 2,
                time_spent: 30,
                is_completed: true,
                pass: false,
            },
        )
        .await
        .unwrap();
    }

    pub async fn add_bookmark(&self, user_id: i64, quiz_id: i64) {
        BookmarkRepository::toggle(self, user_id, quiz_id).await.unwrap();
    }

    /// Raw row lookup, deleted or not.
    pub async fn quiz(&self, id: i64) -> Option<Quiz> {
        self.tables.read().await.quizzes.iter().find(|q| q.id == id).cloned()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.iter().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self.tables.read().await.users.iter().any(|u| u.email == email))
    }

    async fn create(&self, user: &NewUser) -> AppResult<User> {
        let mut t = self.tables.write().await;
        if t.users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict("Resource already exists".to_string()));
        }
        let now = Some(Utc::now());
        let created = User {
            id: t.next_id(),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password_hash.clone(),
            role: user.role,
            is_approved: user.is_approved,
            is_deleted: false,
            profile_pic: user.profile_pic.clone(),
            bio: user.bio.clone(),
            education: user.education.clone(),
            created_at: now,
            updated_at: now,
        };
        t.users.push(created.clone());
        Ok(created)
    }

    async fn set_approved(&self, id: i64, approved: bool) -> AppResult<bool> {
        let mut t = self.tables.write().await;
        Ok(match t.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.is_approved = approved;
                true
            }
            None => false,
        })
    }

    async fn set_deleted(&self, id: i64, deleted: bool) -> AppResult<bool> {
        let mut t = self.tables.write().await;
        Ok(match t.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.is_deleted = deleted;
                true
            }
            None => false,
        })
    }

    async fn list(&self, page: PageRequest) -> AppResult<(Vec<User>, i64)> {
        let t = self.tables.read().await;
        let mut users = t.users.clone();
        users.sort_by(|a, b| b.id.cmp(&a.id));
        Ok((page_of(&users, page.offset(), page.size), users.len() as i64))
    }

    async fn update_profile(&self, id: i64, profile: &ProfileUpdate) -> AppResult<Option<User>> {
        let mut t = self.tables.write().await;
        let Some(user) = t.users.iter_mut().find(|u| u.id == id && !u.is_deleted) else {
            return Ok(None);
        };
        user.name = profile.name.clone();
        if let Some(password_hash) = &profile.password_hash {
            user.password = password_hash.clone();
        }
        user.profile_pic = profile.profile_pic.clone();
        user.bio = profile.bio.clone();
        user.education = profile.education.clone();
        user.updated_at = Some(Utc::now());
        Ok(Some(user.clone()))
    }

    async fn count_live(&self) -> AppResult<i64> {
        let t = self.tables.read().await;
        Ok(t.users.iter().filter(|u| !u.is_deleted).count() as i64)
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn find_live_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        let t = self.tables.read().await;
        Ok(t.categories.iter().find(|c| c.id == id && !c.is_deleted).cloned())
    }

    async fn find_live_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        let t = self.tables.read().await;
        Ok(t.categories.iter().find(|c| c.name == name && !c.is_deleted).cloned())
    }

    async fn create(
        &self,
        creator_id: i64,
        name: &str,
        description: &str,
        category_pic: Option<&str>,
    ) -> AppResult<Category> {
        let mut t = self.tables.write().await;
        if t.categories.iter().any(|c| c.name == name && !c.is_deleted) {
            return Err(AppError::Conflict("Resource already exists".to_string()));
        }
        let now = Some(Utc::now());
        let category = Category {
            id: t.next_id(),
            name: name.to_string(),
            description: description.to_string(),
            category_pic: category_pic.map(str::to_string),
            creator_id,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        t.categories.push(category.clone());
        Ok(category)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
        category_pic: Option<&str>,
    ) -> AppResult<Option<Category>> {
        let mut t = self.tables.write().await;
        if t.categories.iter().any(|c| c.name == name && c.id != id && !c.is_deleted) {
            return Err(AppError::Conflict("Resource already exists".to_string()));
        }
        let Some(category) = t.categories.iter_mut().find(|c| c.id == id && !c.is_deleted) else {
            return Ok(None);
        };
        category.name = name.to_string();
        category.description = description.to_string();
        category.category_pic = category_pic.map(str::to_string);
        category.updated_at = Some(Utc::now());
        Ok(Some(category.clone()))
    }

    async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let mut t = self.tables.write().await;
        Ok(match t.categories.iter_mut().find(|c| c.id == id && !c.is_deleted) {
            Some(category) => {
                category.is_deleted = true;
                category.updated_at = Some(Utc::now());
                true
            }
            None => false,
        })
    }

    async fn list_live(&self) -> AppResult<Vec<Category>> {
        let t = self.tables.read().await;
        let mut live: Vec<Category> = t.categories.iter().filter(|c| !c.is_deleted).cloned().collect();
        live.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(live)
    }

    async fn count_live(&self) -> AppResult<i64> {
        let t = self.tables.read().await;
        Ok(t.categories.iter().filter(|c| !c.is_deleted).count() as i64)
    }
}

#[async_trait]
impl QuizRepository for MemoryStore {
    async fn find_live_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let t = self.tables.read().await;
        Ok(t.quizzes.iter().find(|q| q.id == id && !q.is_deleted).cloned())
    }

    async fn find_live_by_title(&self, title: &str) -> AppResult<Option<Quiz>> {
        let t = self.tables.read().await;
        Ok(t.quizzes.iter().find(|q| q.title == title && !q.is_deleted).cloned())
    }

    async fn find_listing(&self, id: i64) -> AppResult<Option<QuizListing>> {
        let t = self.tables.read().await;
        Ok(t.quizzes
            .iter()
            .find(|q| q.id == id && !q.is_deleted)
            .map(|q| t.listing(q)))
    }

    async fn create(&self, creator_id: i64, draft: &QuizDraft) -> AppResult<Quiz> {
        let mut t = self.tables.write().await;
        if t.quizzes.iter().any(|q| q.title == draft.title && !q.is_deleted) {
            return Err(AppError::Conflict("Resource already exists".to_string()));
        }
        let now = Some(Utc::now());
        let quiz = Quiz {
            id: t.next_id(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            quiz_pic: draft.quiz_pic.clone(),
            time_limit: draft.time_limit,
            pass: draft.pass,
            randomize_questions: draft.randomize_questions,
            is_deleted: false,
            is_bookmarked: false,
            severity: draft.severity,
            category_id: draft.category_id,
            creator_id,
            created_at: now,
            updated_at: now,
        };
        t.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, id: i64, draft: &QuizDraft) -> AppResult<Option<Quiz>> {
        let mut t = self.tables.write().await;
        if t.quizzes.iter().any(|q| q.title == draft.title && q.id != id && !q.is_deleted) {
            return Err(AppError::Conflict("Resource already exists".to_string()));
        }
        let Some(quiz) = t.quizzes.iter_mut().find(|q| q.id == id && !q.is_deleted) else {
            return Ok(None);
        };
        quiz.title = draft.title.clone();
        quiz.description = draft.description.clone();
        quiz.quiz_pic = draft.quiz_pic.clone();
        quiz.time_limit = draft.time_limit;
        quiz.pass = draft.pass;
        quiz.randomize_questions = draft.randomize_questions;
        quiz.severity = draft.severity;
        quiz.category_id = draft.category_id;
        quiz.updated_at = Some(Utc::now());
        Ok(Some(quiz.clone()))
    }

    async fn soft_delete(&self, id: i64) -> AppResult<bool> {
        let mut t = self.tables.write().await;
        Ok(match t.quizzes.iter_mut().find(|q| q.id == id && !q.is_deleted) {
            Some(quiz) => {
                quiz.is_deleted = true;
                quiz.updated_at = Some(Utc::now());
                true
            }
            None => false,
        })
    }

    async fn filter(&self, filter: &QuizFilter) -> AppResult<(Vec<QuizListing>, i64)> {
        let t = self.tables.read().await;
        let mut rows: Vec<&Quiz> = t.quizzes.iter().filter(|q| matches_filter(q, filter)).collect();

        rows.sort_by(|a, b| {
            filter
                .sort
                .iter()
                .map(|order| {
                    let ord = compare_field(a, b, order.field);
                    match order.direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                })
                .find(|ord| ord.is_ne())
                .unwrap_or_else(|| a.id.cmp(&b.id))
        });

        let listings: Vec<QuizListing> = rows.iter().map(|q| t.listing(q)).collect();
        Ok((page_of(&listings, filter.offset(), filter.size), listings.len() as i64))
    }

    async fn count_live_by_creator(&self, creator_id: i64) -> AppResult<i64> {
        let t = self.tables.read().await;
        Ok(t.quizzes
            .iter()
            .filter(|q| q.creator_id == creator_id && !q.is_deleted)
            .count() as i64)
    }
}

#[async_trait]
impl QuestionRepository for MemoryStore {
    async fn create_with_options(
        &self,
        quiz_id: i64,
        request: &QuestionRequest,
    ) -> AppResult<(Question, Vec<QuestionOption>)> {
        let mut t = self.tables.write().await;
        let now = Some(Utc::now());
        let question = Question {
            id: t.next_id(),
            quiz_id,
            text: request.text.clone(),
            question_type: request.question_type,
            question_pic: request.question_pic.clone(),
            max_score: request.max_score,
            randomize_options: request.randomize_options.unwrap_or(false),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        t.questions.push(question.clone());

        let options = t.insert_options(question.id, request);
        Ok((question, options))
    }

    async fn list_by_quiz(&self, quiz_id: i64) -> AppResult<Vec<(Question, Vec<QuestionOption>)>> {
        let t = self.tables.read().await;
        Ok(t.questions
            .iter()
            .filter(|q| q.quiz_id == quiz_id && !q.is_deleted)
            .map(|q| {
                let options = t.options.iter().filter(|o| o.question_id == q.id).cloned().collect();
                (q.clone(), options)
            })
            .collect())
    }

    async fn update_with_options(
        &self,
        quiz_id: i64,
        id: i64,
        request: &QuestionRequest,
    ) -> AppResult<Option<(Question, Vec<QuestionOption>)>> {
        let mut t = self.tables.write().await;
        let now = Some(Utc::now());
        let Some(question) = t
            .questions
            .iter_mut()
            .find(|q| q.id == id && q.quiz_id == quiz_id && !q.is_deleted)
        else {
            return Ok(None);
        };
        question.text = request.text.clone();
        question.question_type = request.question_type;
        question.question_pic = request.question_pic.clone();
        question.max_score = request.max_score;
        question.randomize_options = request.randomize_options.unwrap_or(false);
        question.updated_at = now;
        let question = question.clone();

        for option in t.options.iter_mut().filter(|o| o.question_id == id && !o.is_deleted) {
            option.is_deleted = true;
            option.updated_at = now;
        }
        let options = t.insert_options(id, request);

        Ok(Some((question, options)))
    }

    async fn soft_delete(&self, quiz_id: i64, id: i64) -> AppResult<bool> {
        let mut t = self.tables.write().await;
        Ok(
            match t
                .questions
                .iter_mut()
                .find(|q| q.id == id && q.quiz_id == quiz_id && !q.is_deleted)
            {
                Some(question) => {
                    question.is_deleted = true;
                    question.updated_at = Some(Utc::now());
                    true
                }
                None => false,
            },
        )
    }

    async fn count_live_by_creator(&self, creator_id: i64) -> AppResult<i64> {
        let t = self.tables.read().await;
        Ok(t.questions
            .iter()
            .filter(|qs| !qs.is_deleted)
            .filter(|qs| {
                t.quizzes
                    .iter()
                    .any(|q| q.id == qs.quiz_id && q.creator_id == creator_id && !q.is_deleted)
            })
            .count() as i64)
    }
}

#[async_trait]
impl ResultRepository for MemoryStore {
    async fn create(&self, result: &NewResult) -> AppResult<QuizResult> {
        let mut t = self.tables.write().await;
        let created = QuizResult {
            id: t.next_id(),
            user_id: result.user_id,
            quiz_id: result.quiz_id,
            score: result.score,
            total_score: result.total_score,
            correct_answers: result.correct_answers,
            incorrect_answers: result.incorrect_answers,
            total_question: result.total_question,
            time_spent: result.time_spent,
            is_completed: result.is_completed,
            pass: result.pass,
            created_at: Some(Utc::now()),
        };
        t.results.push(created.clone());
        Ok(created)
    }

    async fn count_by_quiz_ids(&self, quiz_ids: &[i64]) -> AppResult<HashMap<i64, i64>> {
        let t = self.tables.read().await;
        let mut counts = HashMap::new();
        for result in t.results.iter().filter(|r| quiz_ids.contains(&r.quiz_id)) {
            *counts.entry(result.quiz_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn list_by_user(&self, user_id: i64, page: PageRequest) -> AppResult<(Vec<QuizResult>, i64)> {
        let t = self.tables.read().await;
        let mut mine: Vec<QuizResult> = t.results.iter().filter(|r| r.user_id == user_id).cloned().collect();
        mine.sort_by(|a, b| b.id.cmp(&a.id));
        Ok((page_of(&mine, page.offset(), page.size), mine.len() as i64))
    }
}

#[async_trait]
impl BookmarkRepository for MemoryStore {
    async fn bookmarked_among(&self, user_id: i64, quiz_ids: &[i64]) -> AppResult<HashSet<i64>> {
        let t = self.tables.read().await;
        Ok(t.bookmarks
            .iter()
            .filter(|b| b.user_id == user_id && quiz_ids.contains(&b.quiz_id))
            .map(|b| b.quiz_id)
            .collect())
    }

    async fn toggle(&self, user_id: i64, quiz_id: i64) -> AppResult<bool> {
        let mut t = self.tables.write().await;
        let before = t.bookmarks.len();
        t.bookmarks.retain(|b| !(b.user_id == user_id && b.quiz_id == quiz_id));
        if t.bookmarks.len() < before {
            return Ok(false);
        }
        let bookmark = Bookmark {
            id: t.next_id(),
            user_id,
            quiz_id,
            created_at: Some(Utc::now()),
        };
        t.bookmarks.push(bookmark);
        Ok(true)
    }

    async fn list_quizzes(&self, user_id: i64, page: PageRequest) -> AppResult<(Vec<QuizListing>, i64)> {
        let t = self.tables.read().await;
        let mut marks: Vec<&Bookmark> = t.bookmarks.iter().filter(|b| b.user_id == user_id).collect();
        marks.sort_by(|a, b| b.id.cmp(&a.id));

        let listings: Vec<QuizListing> = marks
            .iter()
            .filter_map(|b| t.quizzes.iter().find(|q| q.id == b.quiz_id && !q.is_deleted))
            .map(|q| t.listing(q))
            .collect();
        Ok((page_of(&listings, page.offset(), page.size), listings.len() as i64))
    }
}

pub mod fixtures {
    use std::sync::Arc;

    use super::MemoryStore;
    use crate::{
        config::Config,
        models::{
            question::{OptionRequest, QuestionRequest, QuestionType},
            quiz::{QuizRequest, Severity},
            user::{LoginRequest, Role, SignupRequest},
        },
        services::QuizService,
    };

    pub fn config() -> Config {
        Config {
            database_url: "postgres://unused".to_string(),
            jwt_secret: "test-secret".to_string(),
            jwt_expiration: 3600,
            rust_log: "debug".to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            admin_name: "Administrator".to_string(),
            admin_email: None,
            admin_password: None,
        }
    }

    /// Signup payload with password `secret123`.
    pub fn signup(name: &str, email: &str, role: Role) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
            role,
            profile_pic: None,
            bio: None,
            education: None,
        }
    }

    pub fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn quiz_request(title: &str, category_id: i64, minutes: i64) -> QuizRequest {
        QuizRequest {
            title: title.to_string(),
            description: "A quiz about many things".to_string(),
            quiz_pic: None,
            time_limit: minutes,
            pass: 60,
            randomize_questions: None,
            category_id: Some(category_id),
            severity: Severity::Beginner,
        }
    }

    /// `option_count` options of which the first `correct` are right.
    pub fn question(question_type: QuestionType, option_count: usize, correct: usize) -> QuestionRequest {
        QuestionRequest {
            text: "Which keyword declares a constant?".to_string(),
            question_type,
            question_pic: None,
            max_score: 5,
            randomize_options: None,
            options: (0..option_count)
                .map(|i| OptionRequest {
                    text: format!("Option {i}"),
                    is_correct: i < correct,
                    option_pic: None,
                })
                .collect(),
        }
    }

    pub fn quiz_service(store: &Arc<MemoryStore>) -> QuizService {
        QuizService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        )
    }
}
