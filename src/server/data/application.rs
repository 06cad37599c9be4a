use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{ApplicationStatus, ContractType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, UpdateResult,
};

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a pending application
    pub async fn create(
        &self,
        author_id: i32,
        title: &str,
        pen_name: &str,
        contract_type: ContractType,
    ) -> Result<entity::application::Model, DbErr> {
        let application = entity::application::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            title: ActiveValue::Set(title.to_string()),
            pen_name: ActiveValue::Set(pen_name.to_string()),
            contract_type: ActiveValue::Set(contract_type),
            status: ActiveValue::Set(ApplicationStatus::Pending),
            reject_reason: ActiveValue::Set(None),
            reviewer_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            processed_at: ActiveValue::Set(None),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    pub async fn get(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        entity::prelude::Application::find_by_id(application_id)
            .one(self.db)
            .await
    }

    /// Applications of one author, newest first
    pub async fn list_by_author(
        &self,
        author_id: i32,
    ) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::application::Column::CreatedAt)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await
    }

    /// All applications with their author, newest first
    pub async fn list_with_author(
        &self,
    ) -> Result<Vec<(entity::application::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Application::find()
            .find_also_related(entity::user::Entity)
            .order_by_desc(entity::application::Column::CreatedAt)
            .order_by_desc(entity::application::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks a pending application as approved
    ///
    /// The update only matches rows still in `pending`, a `rows_affected` of 0 means the
    /// application does not exist or was already processed.
    pub async fn mark_approved(
        &self,
        application_id: i32,
        reviewer_id: i32,
        processed_at: NaiveDateTime,
    ) -> Result<UpdateResult, DbErr> {
        self.process(application_id, ApplicationStatus::Approved, None, reviewer_id, processed_at)
            .await
    }

    /// Marks a pending application as rejected with the given reason
    ///
    /// Guarded the same way as [`ApplicationRepository::mark_approved`].
    pub async fn mark_rejected(
        &self,
        application_id: i32,
        reason: &str,
        reviewer_id: i32,
        processed_at: NaiveDateTime,
    ) -> Result<UpdateResult, DbErr> {
        self.process(
            application_id,
            ApplicationStatus::Rejected,
            Some(reason.to_string()),
            reviewer_id,
            processed_at,
        )
        .await
    }

    async fn process(
        &self,
        application_id: i32,
        status: ApplicationStatus,
        reject_reason: Option<String>,
        reviewer_id: i32,
        processed_at: NaiveDateTime,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Application::update_many()
            .set(entity::application::ActiveModel {
                status: ActiveValue::Set(status),
                reject_reason: ActiveValue::Set(reject_reason),
                reviewer_id: ActiveValue::Set(Some(reviewer_id)),
                processed_at: ActiveValue::Set(Some(processed_at)),
                ..Default::default()
            })
            .filter(entity::application::Column::Id.eq(application_id))
            .filter(entity::application::Column::Status.eq(ApplicationStatus::Pending))
            .exec(self.db)
            .await
    }
}
