use std::collections::HashSet;

use crate::model::{Metrics, Page, RoleSet};
use crate::net::api::{
    MapRolesRequest, PageSource, ProfileSource, RolePagesRequest, RoleQuery, RoleSource,
};
use crate::render::layout::RoleMap;
use crate::render::relax::RelaxConfig;
use crate::render::stack::{stack_visuals, PageVisual};
use crate::render::MapGeometry;

/// Lowest classifier confidence accepted for the user's role.
pub const MIN_CONFIDENCE: f32 = 0.5;

/// The only industry the explorer covers.
pub const SUPPORTED_INDUSTRY: &str = "Technology";

/// Longest accepted role name, in characters.
pub const MAX_ROLE_LEN: usize = 100;

/// Offered when the skill lookup is unreachable.
pub const FALLBACK_SKILLS: [&str; 8] = [
    "Python",
    "JavaScript",
    "React",
    "Communication",
    "Leadership",
    "Problem Solving",
    "SQL",
    "Git",
];

/// Error while loading a view's data. Terminal for that view.
#[derive(Debug, Clone)]
pub struct LoadError {
    pub message: String,
    /// Which step failed: `"validate"`, `"profile"`, `"roles"` or `"pages"`
    pub phase: &'static str,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

impl std::error::Error for LoadError {}

/// Local checks on a typed role name before any lookup. Returns it trimmed.
pub fn validate_role_name(input: &str) -> Result<&str, LoadError> {
    let trimmed = input.trim();
    let reject = |message: &str| LoadError {
        message: message.to_string(),
        phase: "validate",
    };

    let len = trimmed.chars().count();
    if len < 2 {
        return Err(reject("Please enter a role"));
    }
    if len > MAX_ROLE_LEN {
        return Err(reject("Role name too long (max 100 characters)"));
    }
    match trimmed.chars().filter(|c| c.is_ascii_alphabetic()).count() {
        0 => Err(reject("Please enter a valid job role")),
        1 | 2 => Err(reject(
            "Please enter a valid job role (e.g., 'Software Engineer')",
        )),
        _ => Ok(trimmed),
    }
}

/// The user's validated role and the work-style metrics inferred for it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub current_role: String,
    pub industry: String,
    pub metrics: Metrics,
}

/// A role map laid out for a validated user profile.
#[derive(Debug, Clone)]
pub struct PersonalizedMap {
    pub profile: UserProfile,
    pub map: RoleMap,
}

/// Detail pages of one role, in fetch order.
#[derive(Debug, Clone, Default)]
pub struct PageStack {
    pub role_name: String,
    pub pages: Vec<Page>,
}

impl PageStack {
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Visual attributes of every page at a scroll position.
    pub fn visuals(&self, position: f32) -> Vec<PageVisual> {
        stack_visuals(self.pages.len(), position)
    }
}

/// The explorer pipeline: Source → Project → Place → Relax → RoleMap, and
/// Source → PageStack.
pub struct ExplorerEngine<S> {
    source: S,
    geometry: MapGeometry,
    relax: RelaxConfig,
}

impl<S> ExplorerEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            geometry: MapGeometry::default(),
            relax: RelaxConfig::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: MapGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_relax(mut self, relax: RelaxConfig) -> Self {
        self.relax = relax;
        self
    }

    pub fn geometry(&self) -> &MapGeometry {
        &self.geometry
    }
}

impl<S: ProfileSource> ExplorerEngine<S> {
    /// Validate the user's role and infer its work-style profile.
    ///
    /// Low-confidence classifications and roles outside the supported
    /// industry are rejected.
    pub fn load_profile(&self, role: &str) -> Result<UserProfile, LoadError> {
        let role = validate_role_name(role)?;
        let query = RoleQuery {
            role: role.to_string(),
        };
        let inferred = self.source.infer_industry(&query).map_err(|e| {
            log::warn!("Industry lookup for {:?} failed: {}", role, e);
            LoadError {
                message: String::from(
                    "Unable to validate role. Please check your connection and try again.",
                ),
                phase: "profile",
            }
        })?;

        if inferred.confidence.is_nan() || inferred.confidence < MIN_CONFIDENCE {
            log::info!("Rejected {:?}: confidence {}", role, inferred.confidence);
            return Err(LoadError {
                message: String::from(
                    "We couldn't recognize that role. Try something like \
                     'Software Engineer' or 'Product Manager'",
                ),
                phase: "profile",
            });
        }
        if inferred.industry != SUPPORTED_INDUSTRY {
            log::info!("Rejected {:?}: industry {}", role, inferred.industry);
            return Err(LoadError {
                message: format!(
                    "Polaris currently focuses on Technology careers. \
                     We detected your role is in {}.",
                    inferred.industry
                ),
                phase: "profile",
            });
        }

        Ok(UserProfile {
            current_role: role.to_string(),
            industry: inferred.industry,
            metrics: inferred.metrics,
        })
    }

    /// Skills worth offering for a role. Falls back to a generic list when
    /// the lookup fails.
    pub fn suggest_skills(&self, role: &str) -> Vec<String> {
        let query = RoleQuery {
            role: role.trim().to_string(),
        };
        match self.source.suggest_skills(&query) {
            Ok(skills) => skills,
            Err(e) => {
                log::warn!("Skill suggestions for {:?} failed: {}", query.role, e);
                FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect()
            }
        }
    }
}

impl<S: ProfileSource + RoleSource> ExplorerEngine<S> {
    /// Validate the user's role, then lay out roles personalized to its profile.
    pub fn load_personalized_map(&self, role: &str) -> Result<PersonalizedMap, LoadError> {
        let profile = self.load_profile(role)?;
        let map = self.load_role_map(&MapRolesRequest {
            current_role: profile.current_role.clone(),
            metrics: Some(profile.metrics),
        })?;
        Ok(PersonalizedMap { profile, map })
    }
}

impl<S: RoleSource> ExplorerEngine<S> {
    /// Fetch candidate roles and lay them out. Nothing is laid out on failure.
    pub fn load_role_map(&self, request: &MapRolesRequest) -> Result<RoleMap, LoadError> {
        let set = self.source.map_roles(request).map_err(|e| {
            log::warn!("Role fetch failed: {}", e);
            LoadError {
                message: e.message,
                phase: "roles",
            }
        })?;

        warn_duplicate_names(&set);

        let map = RoleMap::build(&set, self.geometry, &self.relax);
        log::info!(
            "Loaded role map for {:?}: {} roles (personalized={})",
            request.current_role,
            map.roles.len(),
            map.personalized
        );
        Ok(map)
    }
}

impl<S: PageSource> ExplorerEngine<S> {
    /// Fetch the detail pages of one role.
    pub fn load_role_pages(&self, request: &RolePagesRequest) -> Result<PageStack, LoadError> {
        let pages = self.source.role_pages(request).map_err(|e| {
            log::warn!("Page fetch for {:?} failed: {}", request.role_name, e);
            LoadError {
                message: e.message,
                phase: "pages",
            }
        })?;

        log::info!("Loaded {} pages for {:?}", pages.len(), request.role_name);
        let kinds: Vec<&str> = pages.iter().map(Page::kind_name).collect();
        log::debug!("Page kinds: {:?}", kinds);
        if pages.iter().any(|p| matches!(p, Page::Unknown)) {
            log::warn!("Unrecognized page type for {:?}; shown empty", request.role_name);
        }
        Ok(PageStack {
            role_name: request.role_name.clone(),
            pages,
        })
    }
}

/// Names identify roles on click, so repeats make the map ambiguous.
fn warn_duplicate_names(set: &RoleSet) {
    let mut seen = HashSet::new();
    for role in &set.roles {
        if !seen.insert(role.name.as_str()) {
            log::warn!("Duplicate role name in layout request: {:?}", role.name);
        }
    }
}
