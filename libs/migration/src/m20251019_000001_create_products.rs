use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn categories() -> [ProductCategory; 4] {
    [
        ProductCategory::Accessories,
        ProductCategory::Clothing,
        ProductCategory::Fitness,
        ProductCategory::Electronics,
    ]
}

fn inventory_statuses() -> [InventoryStatus; 3] {
    [
        InventoryStatus::OutOfStock,
        InventoryStatus::LowStock,
        InventoryStatus::InStock,
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(ProductCategory::Enum)
                    .values(categories())
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(InventoryStatus::Enum)
                    .values(inventory_statuses())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_uuid(Products::Id))
                    .col(string(Products::Code))
                    .col(string(Products::Name))
                    .col(text_null(Products::Description))
                    .col(double(Products::Price))
                    .col(integer(Products::Quantity).default(0))
                    .col(
                        ColumnDef::new(Products::InventoryStatus)
                            .enumeration(InventoryStatus::Enum, inventory_statuses())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Products::Category)
                            .enumeration(ProductCategory::Enum, categories())
                            .not_null(),
                    )
                    .col(text_null(Products::Image))
                    .col(double_null(Products::Rating))
                    .col(boolean(Products::Deleted).default(false))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Codes stay reserved after a soft delete, so the index covers every row
        manager
            .create_index(
                Index::create()
                    .name("uq_products_code")
                    .table(Products::Table)
                    .col(Products::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_deleted")
                    .table(Products::Table)
                    .col(Products::Deleted)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER products_touch_updated_at
                    BEFORE UPDATE ON products
                    FOR EACH ROW
                    EXECUTE FUNCTION util.touch_updated_at()
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS products_touch_updated_at ON products")
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(InventoryStatus::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ProductCategory::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Code,
    Name,
    Description,
    Price,
    Quantity,
    InventoryStatus,
    Category,
    Image,
    Rating,
    Deleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProductCategory {
    #[sea_orm(iden = "product_category")]
    Enum,
    #[sea_orm(iden = "Accessories")]
    Accessories,
    #[sea_orm(iden = "Clothing")]
    Clothing,
    #[sea_orm(iden = "Fitness")]
    Fitness,
    #[sea_orm(iden = "Electronics")]
    Electronics,
}

#[derive(DeriveIden)]
enum InventoryStatus {
    #[sea_orm(iden = "inventory_status")]
    Enum,
    #[sea_orm(iden = "OUT_OF_STOCK")]
    OutOfStock,
    #[sea_orm(iden = "LOW_STOCK")]
    LowStock,
    #[sea_orm(iden = "IN_STOCK")]
    InStock,
}
