use diesel::prelude::*;

use crate::domain::product::{LOW_STOCK_THRESHOLD, NewProduct, Product, ProductChanges};
use crate::domain::types::ProductId;
use crate::models::product::{
    NewProduct as DbNewProduct, Product as DbProduct, ProductChanges as DbProductChanges,
};
use crate::repository::{DieselRepository, ProductReader, ProductWriter, RepositoryResult};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        let items = product::table
            .order(product::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn list_low_stock_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        let items = product::table
            .filter(product::quantity.lt(LOW_STOCK_THRESHOLD))
            .order(product::id.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Product>, _>>()?;

        Ok(items)
    }

    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        let item = product::table
            .filter(product::id.eq(id.get()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        let item = item.map(TryInto::try_into).transpose()?;
        Ok(item)
    }

    fn product_exists(&self, id: ProductId) -> RepositoryResult<bool> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        let exists = diesel::select(diesel::dsl::exists(
            product::table.filter(product::id.eq(id.get())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(exists)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<ProductId> {
        use crate::schema::product;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = new_product.clone().into();

        let id = diesel::insert_into(product::table)
            .values(db_product)
            .returning(product::id)
            .get_result::<i32>(&mut conn)?;

        Ok(ProductId::new(id)?)
    }

    fn update_product(&self, id: ProductId, changes: &ProductChanges) -> RepositoryResult<usize> {
        use crate::schema::product;

        let mut conn = self.conn()?;
        let db_changes: DbProductChanges = changes.clone().into();

        let affected = diesel::update(product::table.filter(product::id.eq(id.get())))
            .set(db_changes)
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(product::table.filter(product::id.eq(id.get()))).execute(&mut conn)?;

        Ok(affected)
    }
}
