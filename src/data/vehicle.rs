use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get all catalog vehicles in storage order
    pub async fn get_all(&self) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find().all(self.db).await
    }

    /// Get a vehicle by its ID
    pub async fn get_by_id(
        &self,
        vehicle_id: i32,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }
}
