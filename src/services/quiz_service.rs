// src/services/quiz_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        page::{PageRequest, PageResponse},
        question::QuestionResponse,
        quiz::{
            Quiz, QuizDetailResponse, QuizDraft, QuizFilter, QuizFilterParams, QuizListing,
            QuizRequest, QuizResponse,
        },
        user::Role,
    },
    repositories::{
        BookmarkRepository, CategoryRepository, QuestionRepository, QuizRepository,
        ResultRepository,
    },
    services::Requester,
    utils::{dates::parse_date_range, html::clean_html, sort::parse_sort},
};

/// Quiz creation, update, soft deletion and filtering.
#[derive(Clone)]
pub struct QuizService {
    quizzes: Arc<dyn QuizRepository>,
    categories: Arc<dyn CategoryRepository>,
    questions: Arc<dyn QuestionRepository>,
    results: Arc<dyn ResultRepository>,
    bookmarks: Arc<dyn BookmarkRepository>,
}

impl QuizService {
    pub fn new(
        quizzes: Arc<dyn QuizRepository>,
        categories: Arc<dyn CategoryRepository>,
        questions: Arc<dyn QuestionRepository>,
        results: Arc<dyn ResultRepository>,
        bookmarks: Arc<dyn BookmarkRepository>,
    ) -> Self {
        Self {
            quizzes,
            categories,
            questions,
            results,
            bookmarks,
        }
    }

    /// Creates a quiz owned by the requester.
    ///
    /// * Rejects a title already held by a live quiz (case-sensitive).
    /// * Resolves the category, which must exist and not be deleted.
    /// * Stores the time limit in seconds.
    ///
    /// The description is sanitised before validation so that the stored text
    /// is the one checked against the length bounds.
    pub async fn create(&self, requester: &Requester, mut request: QuizRequest) -> AppResult<QuizResponse> {
        request.description = clean_html(&request.description);
        request.validate()?;

        if self.quizzes.find_live_by_title(&request.title).await?.is_some() {
            return Err(AppError::Conflict(
                "Quiz already exists. Please try with another name.".to_string(),
            ));
        }

        let category_id = request
            .category_id
            .ok_or_else(|| AppError::BadRequest("Category is required.".to_string()))?;
        self.ensure_category(category_id).await?;

        let draft = build_draft(request, category_id);
        let quiz = self.quizzes.create(requester.user_id, &draft).await?;
        tracing::info!("Quiz {} created by user {}", quiz.id, requester.user_id);

        let listing = self.listing_of(&quiz).await?;
        Ok(QuizResponse::from_listing(listing, 0, false))
    }

    /// Overwrites the mutable fields of a live quiz.
    ///
    /// Keeping the quiz's own title is allowed; taking another live quiz's title is not.
    /// The category only changes when `category_id` is supplied.
    pub async fn update(&self, requester: &Requester, id: i64, mut request: QuizRequest) -> AppResult<QuizResponse> {
        request.description = clean_html(&request.description);
        request.validate()?;

        let quiz = self.find_live(id).await?;

        if let Some(holder) = self.quizzes.find_live_by_title(&request.title).await? {
            if holder.id != quiz.id {
                return Err(AppError::Conflict(
                    "Please change the name because a quiz with this name already exists".to_string(),
                ));
            }
        }

        let category_id = match request.category_id {
            Some(category_id) => {
                self.ensure_category(category_id).await?;
                category_id
            }
            None => quiz.category_id,
        };

        let draft = build_draft(request, category_id);
        let updated = self
            .quizzes
            .update(id, &draft)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Quiz {} updated by user {}", id, requester.user_id);

        let listing = self.listing_of(&updated).await?;
        self.enrich_one(listing, Some(requester)).await
    }

    /// Soft-deletes a live quiz. Returns its id.
    pub async fn delete(&self, requester: &Requester, id: i64) -> AppResult<i64> {
        self.find_live(id).await?;

        if !self.quizzes.soft_delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!("Quiz {} deleted by user {}", id, requester.user_id);

        Ok(id)
    }

    /// A live quiz with its questions and options.
    pub async fn get(&self, requester: &Requester, id: i64) -> AppResult<QuizDetailResponse> {
        let listing = self
            .quizzes
            .find_listing(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let quiz = self.enrich_one(listing, Some(requester)).await?;

        let questions = self
            .questions
            .list_by_quiz(id)
            .await?
            .into_iter()
            .map(|(question, options)| QuestionResponse::new(question, options))
            .collect();

        Ok(QuizDetailResponse { quiz, questions })
    }

    /// Filters live quizzes.
    ///
    /// With a requester who is an Educator and `toggle` off, results are scoped to
    /// the requester's own quizzes whatever `creator_id` says. Without a requester
    /// (public listing) no scoping applies and nothing is bookmarked.
    pub async fn filter(
        &self,
        requester: Option<&Requester>,
        params: QuizFilterParams,
    ) -> AppResult<PageResponse<QuizResponse>> {
        let filter = resolve_filter(requester, params)?;
        let (listings, total) = self.quizzes.filter(&filter).await?;

        let content = enrich(
            self.results.as_ref(),
            self.bookmarks.as_ref(),
            listings,
            requester.map(|r| r.user_id),
        )
        .await?;

        Ok(PageResponse::new(content, filter.page, filter.size, total))
    }

    async fn find_live(&self, id: i64) -> AppResult<Quiz> {
        self.quizzes
            .find_live_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn ensure_category(&self, category_id: i64) -> AppResult<()> {
        self.categories
            .find_live_by_id(category_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Category not found with the id {category_id}"))
            })?;
        Ok(())
    }

    async fn listing_of(&self, quiz: &Quiz) -> AppResult<QuizListing> {
        self.quizzes
            .find_listing(quiz.id)
            .await?
            .ok_or_else(|| not_found(quiz.id))
    }

    async fn enrich_one(&self, listing: QuizListing, requester: Option<&Requester>) -> AppResult<QuizResponse> {
        let mut enriched = enrich(
            self.results.as_ref(),
            self.bookmarks.as_ref(),
            vec![listing],
            requester.map(|r| r.user_id),
        )
        .await?;
        enriched
            .pop()
            .ok_or_else(|| AppError::InternalServerError("quiz enrichment lost a row".to_string()))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Quiz not found with the id {id}"))
}

fn build_draft(request: QuizRequest, category_id: i64) -> QuizDraft {
    QuizDraft {
        title: request.title,
        description: request.description,
        quiz_pic: request.quiz_pic,
        time_limit: minutes_to_seconds(request.time_limit),
        pass: request.pass,
        randomize_questions: request.randomize_questions.unwrap_or(false),
        severity: request.severity,
        category_id,
    }
}

pub(crate) fn minutes_to_seconds(minutes: i64) -> i64 {
    minutes.saturating_mul(60)
}

/// Turns raw query parameters into a repository filter, applying
/// educator self-scoping, unit conversion, date range and sort parsing.
pub(crate) fn resolve_filter(
    requester: Option<&Requester>,
    params: QuizFilterParams,
) -> AppResult<QuizFilter> {
    let mut creator_id = params.creator_id;
    if let Some(requester) = requester {
        if !params.toggle.unwrap_or(false) && requester.role == Role::Educator {
            creator_id = Some(requester.user_id);
        }
    }

    let (created_from, created_to) = match (params.start.as_deref(), params.end.as_deref()) {
        (Some(start), Some(end)) => {
            let (from, to) = parse_date_range(start, end)?;
            (Some(from), Some(to))
        }
        _ => (None, None),
    };

    let sort = match params.sort.as_deref() {
        Some(expr) => parse_sort(expr)?,
        None => Vec::new(),
    };

    let page = PageRequest::new(params.page, params.size);

    Ok(QuizFilter {
        creator_id,
        severity: params.severity,
        created_from,
        created_to,
        query: params.query,
        category_id: params.category_id,
        max_time_limit: params.time_limit.map(minutes_to_seconds),
        max_pass: params.pass,
        randomize_questions: params.randomize_questions,
        sort,
        page: page.page,
        size: page.size,
    })
}

/// Attaches the attempt count and the viewer's bookmark flag to each listing.
pub(crate) async fn enrich(
    results: &dyn ResultRepository,
    bookmarks: &dyn BookmarkRepository,
    listings: Vec<QuizListing>,
    viewer_id: Option<i64>,
) -> AppResult<Vec<QuizResponse>> {
    let ids: Vec<i64> = listings.iter().map(|l| l.quiz.id).collect();

    let counts = results.count_by_quiz_ids(&ids).await?;
    let bookmarked = match viewer_id {
        Some(user_id) => bookmarks.bookmarked_among(user_id, &ids).await?,
        None => Default::default(),
    };

    Ok(listings
        .into_iter()
        .map(|listing| {
            let id = listing.quiz.id;
            let attempts = counts.get(&id).copied().unwrap_or(0);
            QuizResponse::from_listing(listing, attempts, bookmarked.contains(&id))
        })
        .collect())
}
