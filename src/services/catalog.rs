use crate::models::{BeanForm, CoffeeBean, RoastLevel};
use std::sync::RwLock;
use thiserror::Error;

/// Errors from the catalog store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("bean not found: {0}")]
    NotFound(u32),
}

/// In-memory catalog of coffee beans
///
/// The shop catalog lives in process memory and is seeded with the
/// reference dataset. Handlers take snapshots out of the lock, so the
/// engine only ever sees an immutable slice.
pub struct CatalogStore {
    beans: RwLock<Vec<CoffeeBean>>,
}

impl CatalogStore {
    pub fn new(beans: Vec<CoffeeBean>) -> Self {
        Self {
            beans: RwLock::new(beans),
        }
    }

    pub fn with_reference_beans() -> Self {
        Self::new(reference_beans())
    }

    /// Snapshot of the whole catalog
    pub fn all(&self) -> Vec<CoffeeBean> {
        self.beans.read().expect("catalog lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.beans.read().expect("catalog lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: u32) -> Result<CoffeeBean, CatalogError> {
        self.beans
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .find(|bean| bean.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn create(&self, form: BeanForm) -> CoffeeBean {
        let mut beans = self.beans.write().expect("catalog lock poisoned");
        let id = beans.iter().map(|bean| bean.id).max().unwrap_or(0) + 1;

        let bean = CoffeeBean {
            id,
            name: form.name,
            origin: form.origin,
            roast_level: form.roast_level,
            flavor: form.flavor,
            description: form.description,
            price: form.price,
            image: form.image,
        };

        beans.push(bean.clone());
        bean
    }

    pub fn update(&self, id: u32, form: BeanForm) -> Result<CoffeeBean, CatalogError> {
        let mut beans = self.beans.write().expect("catalog lock poisoned");
        let bean = beans
            .iter_mut()
            .find(|bean| bean.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        bean.name = form.name;
        bean.origin = form.origin;
        bean.roast_level = form.roast_level;
        bean.flavor = form.flavor;
        bean.description = form.description;
        bean.price = form.price;
        bean.image = form.image;

        Ok(bean.clone())
    }

    pub fn delete(&self, id: u32) -> Result<(), CatalogError> {
        let mut beans = self.beans.write().expect("catalog lock poisoned");
        let index = beans
            .iter()
            .position(|bean| bean.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        beans.remove(index);
        Ok(())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::with_reference_beans()
    }
}

/// The six reference beans the shop opened with
pub fn reference_beans() -> Vec<CoffeeBean> {
    vec![
        CoffeeBean {
            id: 1,
            name: "Ethiopia Yirgacheffe".to_string(),
            origin: "Ethiopia, Yirgacheffe".to_string(),
            roast_level: RoastLevel::Light,
            flavor: vec![
                "floral".to_string(),
                "citrus".to_string(),
                "bergamot".to_string(),
            ],
            description: "A bright, fragrant Ethiopian specialty with lemon and bergamot \
                          acidity over a delicate floral cup."
                .to_string(),
            price: 18.50,
            image: None,
        },
        CoffeeBean {
            id: 2,
            name: "Colombia Supremo".to_string(),
            origin: "Colombia, Huila".to_string(),
            roast_level: RoastLevel::Medium,
            flavor: vec![
                "chocolate".to_string(),
                "caramel".to_string(),
                "nut".to_string(),
            ],
            description: "A balanced Colombian premium bean where smooth chocolate and \
                          caramel sweetness meet a rounded body."
                .to_string(),
            price: 16.00,
            image: None,
        },
        CoffeeBean {
            id: 3,
            name: "Kenya AA".to_string(),
            origin: "Kenya, Nyeri".to_string(),
            roast_level: RoastLevel::Medium,
            flavor: vec![
                "blackcurrant".to_string(),
                "wine".to_string(),
                "tomato".to_string(),
            ],
            description: "Kenya's signature wine-like acidity with deep blackcurrant fruit \
                          and a weighty, full-bodied texture."
                .to_string(),
            price: 19.50,
            image: None,
        },
        CoffeeBean {
            id: 4,
            name: "Guatemala Antigua".to_string(),
            origin: "Guatemala, Antigua".to_string(),
            roast_level: RoastLevel::MediumDark,
            flavor: vec![
                "spicy".to_string(),
                "cocoa".to_string(),
                "smoky".to_string(),
            ],
            description: "Grown in volcanic soil, layering smoky aroma and spice over \
                          sweet cocoa in a complex cup."
                .to_string(),
            price: 17.00,
            image: None,
        },
        CoffeeBean {
            id: 5,
            name: "Brazil Santos".to_string(),
            origin: "Brazil, Santos".to_string(),
            roast_level: RoastLevel::MediumDark,
            flavor: vec![
                "nut".to_string(),
                "chocolate".to_string(),
                "brown sugar".to_string(),
            ],
            description: "A mellow crowd-pleaser with toasted nut, chocolate sweetness \
                          and low acidity that anyone can enjoy."
                .to_string(),
            price: 14.50,
            image: None,
        },
        CoffeeBean {
            id: 6,
            name: "Sumatra Mandheling".to_string(),
            origin: "Indonesia, Sumatra".to_string(),
            roast_level: RoastLevel::Dark,
            flavor: vec![
                "herbal".to_string(),
                "dark chocolate".to_string(),
                "earthy".to_string(),
            ],
            description: "A heavy-bodied Indonesian bean with distinctive herbal notes, \
                          bittersweet dark chocolate and an earthy finish."
                .to_string(),
            price: 15.50,
            image: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> BeanForm {
        BeanForm {
            name: name.to_string(),
            origin: "Peru, Cajamarca".to_string(),
            roast_level: RoastLevel::Medium,
            flavor: vec!["caramel".to_string()],
            description: "A test bean for the store tests.".to_string(),
            price: 12.00,
            image: None,
        }
    }

    #[test]
    fn test_seeded_with_reference_beans() {
        let store = CatalogStore::with_reference_beans();
        assert_eq!(store.len(), 6);
        assert_eq!(store.get(1).unwrap().name, "Ethiopia Yirgacheffe");
    }

    #[test]
    fn test_create_assigns_next_id() {
        let store = CatalogStore::with_reference_beans();
        let bean = store.create(form("Peru Organic"));

        assert_eq!(bean.id, 7);
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let store = CatalogStore::new(vec![]);
        let bean = store.create(form("Peru Organic"));
        assert_eq!(bean.id, 1);
    }

    #[test]
    fn test_update_existing_bean() {
        let store = CatalogStore::with_reference_beans();
        let mut update = form("Kenya AA Top");
        update.price = 21.00;

        let bean = store.update(3, update).unwrap();
        assert_eq!(bean.id, 3);
        assert_eq!(bean.name, "Kenya AA Top");
        assert_eq!(store.get(3).unwrap().price, 21.00);
    }

    #[test]
    fn test_update_missing_bean() {
        let store = CatalogStore::with_reference_beans();
        let err = store.update(99, form("Ghost")).unwrap_err();
        assert_eq!(err, CatalogError::NotFound(99));
    }

    #[test]
    fn test_delete_bean() {
        let store = CatalogStore::with_reference_beans();
        store.delete(2).unwrap();

        assert_eq!(store.len(), 5);
        assert_eq!(store.get(2).unwrap_err(), CatalogError::NotFound(2));
        assert_eq!(store.delete(2).unwrap_err(), CatalogError::NotFound(2));
    }
}
