//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 인프라 컴포넌트(저장소 핸들 등)를 타입 기반으로 보관하고,
//! `inventory`로 수집된 서비스 등록 정보를 이용해 애플리케이션 시작 시
//! 모든 서비스 싱글톤을 미리 생성합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ inventory::submit! → ServiceRegistration 수집
//!
//! 2. 런타임 초기화 (main.rs)
//!    ├─ Stores 생성 (MongoDB 또는 메모리)
//!    └─ ServiceLocator::set(Arc<Stores>)
//!
//! 3. 서비스 생성
//!    └─ ServiceLocator::initialize_all() → 각 서비스의 instance() 호출
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//! use crate::repositories::Stores;
//!
//! ServiceLocator::set(Arc::new(Stores::in_memory()));
//! ServiceLocator::initialize_all();
//!
//! let stores = ServiceLocator::get::<Stores>();
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::utils::display_terminal::{print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task};

/// 서비스 등록 정보
///
/// 각 서비스 모듈이 `inventory::submit!`으로 제출합니다.
pub struct ServiceRegistration {
    /// 서비스의 고유 이름 (예: `user_service`)
    pub name: &'static str,
    /// 싱글톤 인스턴스를 생성(또는 반환)하는 함수
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);

/// 싱글톤 의존성 주입 컨테이너
pub struct ServiceLocator {
    /// `TypeId`를 키로 하는 인스턴스 캐시
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 등록된 인스턴스를 가져옵니다. 없으면 `None`.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 가져옵니다.
    ///
    /// # Panics
    ///
    /// 해당 타입이 `set()`으로 등록되지 않은 경우. 부팅 순서 오류이므로
    /// 시작 시점에 즉시 실패하도록 합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|| {
            panic!(
                "Component not registered: {}. Register it with ServiceLocator::set() before use",
                Self::extract_clean_type_name(std::any::type_name::<T>())
            )
        })
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", clean_name);

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 등록된 서비스의 싱글톤을 생성합니다.
    ///
    /// 생성된 서비스 수를 반환합니다.
    pub fn initialize_all() -> usize {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let count = registrations.len();

        if count > 0 {
            print_step_start(1, "Creating Service instances");

            for registration in registrations {
                print_sub_task(registration.name, "Creating...");
                let _instance = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }

            print_step_complete(1, "Service instances created", count);
        }

        print_final_summary(count);
        count
    }

    /// `std::any::type_name`의 모듈 경로를 제거합니다.
    fn extract_clean_type_name(type_name: &str) -> &str {
        match type_name.rfind("::") {
            Some(pos) => &type_name[pos + 2..],
            None => type_name,
        }
    }
}

/// 전역 서비스 로케이터 인스턴스
static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);
