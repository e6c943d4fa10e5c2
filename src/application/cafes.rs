use std::sync::Arc;

use thiserror::Error;

use crate::application::repos::{CafesRepo, CreateCafeParams, RepoError};
use crate::domain::entities::CafeRecord;

#[derive(Debug, Error)]
pub enum CafeError {
    #[error("a cafe named `{name}` already exists")]
    DuplicateName { name: String },
    #[error("no cafe with id {id}")]
    NotFound { id: i64 },
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Use cases over the cafe directory. Thin by design: the store enforces
/// the uniqueness and existence rules, and this layer translates its
/// verdicts into errors the HTTP surface can phrase for clients.
#[derive(Clone)]
pub struct CafeService {
    repo: Arc<dyn CafesRepo>,
}

impl CafeService {
    pub fn new(repo: Arc<dyn CafesRepo>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<CafeRecord>, CafeError> {
        self.repo.list_all().await.map_err(CafeError::from)
    }

    pub async fn random(&self) -> Result<Option<CafeRecord>, CafeError> {
        self.repo.random().await.map_err(CafeError::from)
    }

    pub async fn search_by_location(&self, location: &str) -> Result<Vec<CafeRecord>, CafeError> {
        self.repo
            .filter_by_location(location)
            .await
            .map_err(CafeError::from)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<CafeRecord>, CafeError> {
        self.repo.find_by_id(id).await.map_err(CafeError::from)
    }

    /// Insert a new cafe. Name collisions surface as the store's unique
    /// constraint on a single insert, so add stays one round trip.
    pub async fn add_cafe(&self, params: CreateCafeParams) -> Result<CafeRecord, CafeError> {
        let name = params.name.clone();
        match self.repo.insert(params).await {
            Ok(cafe) => Ok(cafe),
            Err(RepoError::Duplicate { .. }) => Err(CafeError::DuplicateName { name }),
            Err(err) => Err(CafeError::Repo(err)),
        }
    }

    pub async fn update_price(&self, id: i64, new_price: &str) -> Result<CafeRecord, CafeError> {
        match self.repo.update_price(id, new_price).await? {
            Some(cafe) => Ok(cafe),
            None => Err(CafeError::NotFound { id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct StubCafesRepo {
        cafes: Mutex<Vec<CafeRecord>>,
    }

    impl StubCafesRepo {
        fn with_cafe(record: CafeRecord) -> Self {
            Self {
                cafes: Mutex::new(vec![record]),
            }
        }
    }

    #[async_trait]
    impl CafesRepo for StubCafesRepo {
        async fn insert(&self, params: CreateCafeParams) -> Result<CafeRecord, RepoError> {
            let mut cafes = self.cafes.lock().unwrap();
            if cafes.iter().any(|cafe| cafe.name == params.name) {
                return Err(RepoError::Duplicate {
                    constraint: "cafes.name".into(),
                });
            }
            let record = CafeRecord {
                id: cafes.len() as i64 + 1,
                name: params.name,
                map_url: params.map_url,
                img_url: params.img_url,
                location: params.location,
                seats: params.seats,
                has_toilet: params.has_toilet,
                has_wifi: params.has_wifi,
                has_sockets: params.has_sockets,
                can_take_calls: params.can_take_calls,
                coffee_price: params.coffee_price,
            };
            cafes.push(record.clone());
            Ok(record)
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<CafeRecord>, RepoError> {
            let cafes = self.cafes.lock().unwrap();
            Ok(cafes.iter().find(|cafe| cafe.id == id).cloned())
        }

        async fn list_all(&self) -> Result<Vec<CafeRecord>, RepoError> {
            Ok(self.cafes.lock().unwrap().clone())
        }

        async fn random(&self) -> Result<Option<CafeRecord>, RepoError> {
            Ok(self.cafes.lock().unwrap().first().cloned())
        }

        async fn filter_by_location(&self, location: &str) -> Result<Vec<CafeRecord>, RepoError> {
            let cafes = self.cafes.lock().unwrap();
            Ok(cafes
                .iter()
                .filter(|cafe| cafe.location == location)
                .cloned()
                .collect())
        }

        async fn update_price(
            &self,
            id: i64,
            new_price: &str,
        ) -> Result<Option<CafeRecord>, RepoError> {
            let mut cafes = self.cafes.lock().unwrap();
            match cafes.iter_mut().find(|cafe| cafe.id == id) {
                Some(cafe) => {
                    cafe.coffee_price = Some(new_price.to_string());
                    Ok(Some(cafe.clone()))
                }
                None => Ok(None),
            }
        }
    }

    fn sample_cafe(id: i64, name: &str) -> CafeRecord {
        CafeRecord {
            id,
            name: name.to_string(),
            map_url: "https://maps.example/a".to_string(),
            img_url: "https://img.example/a.jpg".to_string(),
            location: "Shoreditch".to_string(),
            seats: "20-30".to_string(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: Some("£2.40".to_string()),
        }
    }

    fn sample_params(name: &str) -> CreateCafeParams {
        CreateCafeParams {
            name: name.to_string(),
            map_url: "https://maps.example/b".to_string(),
            img_url: "https://img.example/b.jpg".to_string(),
            location: "Peckham".to_string(),
            seats: "0-10".to_string(),
            has_toilet: false,
            has_wifi: true,
            has_sockets: true,
            can_take_calls: true,
            coffee_price: None,
        }
    }

    #[tokio::test]
    async fn add_cafe_translates_duplicate_names() {
        let service = CafeService::new(Arc::new(StubCafesRepo::with_cafe(sample_cafe(
            1, "Lyle's",
        ))));

        let err = service
            .add_cafe(sample_params("Lyle's"))
            .await
            .expect_err("duplicate insert must fail");

        match err {
            CafeError::DuplicateName { name } => assert_eq!(name, "Lyle's"),
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn add_cafe_returns_the_stored_record() {
        let service = CafeService::new(Arc::new(StubCafesRepo::default()));

        let cafe = service
            .add_cafe(sample_params("Prufrock"))
            .await
            .expect("insert succeeds");

        assert_eq!(cafe.id, 1);
        assert_eq!(cafe.name, "Prufrock");
        assert_eq!(cafe.coffee_price, None);
    }

    #[tokio::test]
    async fn update_price_maps_missing_row_to_not_found() {
        let service = CafeService::new(Arc::new(StubCafesRepo::with_cafe(sample_cafe(
            1, "Lyle's",
        ))));

        let err = service
            .update_price(99, "£3.10")
            .await
            .expect_err("unknown id must fail");

        match err {
            CafeError::NotFound { id } => assert_eq!(id, 99),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_price_touches_only_the_price() {
        let original = sample_cafe(1, "Lyle's");
        let service = CafeService::new(Arc::new(StubCafesRepo::with_cafe(original.clone())));

        let updated = service
            .update_price(1, "£3.10")
            .await
            .expect("update succeeds");

        assert_eq!(updated.coffee_price.as_deref(), Some("£3.10"));
        assert_eq!(
            CafeRecord {
                coffee_price: original.coffee_price.clone(),
                ..updated
            },
            original
        );
    }
}
