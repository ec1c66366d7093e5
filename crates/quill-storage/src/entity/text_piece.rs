use sea_orm::entity::prelude::*;

use quill_core::models::text_piece::TextPiece;

/// Row of the `text_pieces` relation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "text_pieces")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true, column_type = "Integer")]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TextPiece {
    fn from(model: Model) -> Self {
        TextPiece {
            id: model.id,
            content: model.content,
        }
    }
}
