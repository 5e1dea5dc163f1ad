//! Service-level tests against an in-memory mock of the database port.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use xraydb_core::{
    AppCore, AtomicShell, AtomicShellQuery, AtomicSubshell, AtomicSubshellQuery, CoreError,
    DatabaseError, DefaultReferences, Element, ElementQuery, Encoding, PropertyKind, Repos,
    RepositoryError, Settings, SettingsRepository, SettingsUpdate, XrayDatabase, XrayLineQuery, XrayTransition,
    XrayTransitionQuery, XrayTransitionSet, XrayTransitionSetQuery,
};

fn subshell(n: u32, l: u32, j_n: u32) -> AtomicSubshell {
    AtomicSubshell::new(n, l, j_n).unwrap()
}

fn ka1() -> XrayTransition {
    XrayTransition::new(subshell(2, 1, 3), subshell(1, 0, 1))
}

fn ka2() -> XrayTransition {
    XrayTransition::new(subshell(2, 1, 1), subshell(1, 0, 1))
}

fn not_found(what: &str) -> DatabaseError {
    DatabaseError::NotFound(what.to_string())
}

/// Iron only: symbol, two K lines and the Ka doublet.
struct MockDatabase {
    defaults: DefaultReferences,
    transition_notations: HashMap<&'static str, (XrayTransition, &'static str)>,
    energies: HashMap<XrayTransition, f64>,
    probabilities: HashMap<XrayTransition, f64>,
}

impl MockDatabase {
    fn new() -> Self {
        let mut transition_notations = HashMap::new();
        transition_notations.insert("K-L3", (ka1(), "iupac"));
        transition_notations.insert("K-L2", (ka2(), "iupac"));
        transition_notations.insert("Ka1", (ka1(), "siegbahn"));

        let energies = HashMap::from([(ka1(), 6403.84), (ka2(), 6390.84)]);
        let probabilities = HashMap::from([(ka1(), 0.58), (ka2(), 0.29)]);

        Self {
            defaults: DefaultReferences::new(),
            transition_notations,
            energies,
            probabilities,
        }
    }

    fn ka_set() -> XrayTransitionSet {
        XrayTransitionSet::new([ka1(), ka2()]).unwrap()
    }

    fn check_iron(element: &ElementQuery) -> Result<Element, DatabaseError> {
        match element {
            ElementQuery::AtomicNumber(26) => Ok(Element::new(26).unwrap()),
            ElementQuery::Text(t) if t.eq_ignore_ascii_case("fe") => Ok(Element::new(26).unwrap()),
            _ => Err(not_found("element")),
        }
    }
}

#[async_trait]
impl XrayDatabase for MockDatabase {
    async fn element(&self, element: &ElementQuery) -> Result<Element, DatabaseError> {
        Self::check_iron(element)
    }

    async fn element_symbol(
        &self,
        element: &ElementQuery,
        _reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        Self::check_iron(element).map(|_| "Fe".to_string())
    }

    async fn element_name(
        &self,
        _element: &ElementQuery,
        _language: &str,
        _reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        Err(not_found("name"))
    }

    async fn element_atomic_weight(
        &self,
        element: &ElementQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        Self::check_iron(element).map(|_| 55.845)
    }

    async fn element_mass_density_kg_per_m3(
        &self,
        element: &ElementQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        Self::check_iron(element).map(|_| 7874.0)
    }

    async fn element_xray_transitions(
        &self,
        element: &ElementQuery,
        _xray_transitionset: Option<&XrayTransitionSetQuery>,
        _reference: Option<&str>,
    ) -> Result<Vec<XrayTransition>, DatabaseError> {
        Self::check_iron(element)?;
        Ok(vec![ka2(), ka1()])
    }

    async fn atomic_shell(
        &self,
        _atomic_shell: &AtomicShellQuery,
    ) -> Result<AtomicShell, DatabaseError> {
        Err(not_found("shell"))
    }

    async fn atomic_shell_notation(
        &self,
        _atomic_shell: &AtomicShellQuery,
        _notation: &str,
        _encoding: Encoding,
        _reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        Err(not_found("shell notation"))
    }

    async fn atomic_subshell(
        &self,
        _atomic_subshell: &AtomicSubshellQuery,
    ) -> Result<AtomicSubshell, DatabaseError> {
        Err(not_found("subshell"))
    }

    async fn atomic_subshell_notation(
        &self,
        _atomic_subshell: &AtomicSubshellQuery,
        _notation: &str,
        _encoding: Encoding,
        _reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        Err(not_found("subshell notation"))
    }

    async fn atomic_subshell_binding_energy_ev(
        &self,
        _element: &ElementQuery,
        atomic_subshell: &AtomicSubshellQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        match atomic_subshell {
            AtomicSubshellQuery::QuantumNumbers(1, 0, 1) => Ok(7112.0),
            _ => Err(not_found("binding energy")),
        }
    }

    async fn atomic_subshell_radiative_width_ev(
        &self,
        _element: &ElementQuery,
        _atomic_subshell: &AtomicSubshellQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        Err(not_found("radiative width"))
    }

    async fn atomic_subshell_nonradiative_width_ev(
        &self,
        _element: &ElementQuery,
        _atomic_subshell: &AtomicSubshellQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        Err(not_found("nonradiative width"))
    }

    async fn atomic_subshell_occupancy(
        &self,
        _element: &ElementQuery,
        _atomic_subshell: &AtomicSubshellQuery,
        _reference: Option<&str>,
    ) -> Result<u32, DatabaseError> {
        Ok(2)
    }

    async fn xray_transition(
        &self,
        xray_transition: &XrayTransitionQuery,
    ) -> Result<XrayTransition, DatabaseError> {
        match xray_transition {
            XrayTransitionQuery::Subshells(src, dst) => Ok(XrayTransition::new(*src, *dst)),
            XrayTransitionQuery::Notation(n) => self
                .transition_notations
                .get(n.as_str())
                .map(|(t, _)| *t)
                .ok_or_else(|| not_found("transition")),
        }
    }

    async fn xray_transition_notation(
        &self,
        xray_transition: &XrayTransitionQuery,
        notation: &str,
        _encoding: Encoding,
        _reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        let transition = self.xray_transition(xray_transition).await?;
        self.transition_notations
            .iter()
            .find(|(_, (t, n))| *t == transition && *n == notation)
            .map(|(name, _)| (*name).to_string())
            .ok_or_else(|| not_found("transition notation"))
    }

    async fn xray_transition_energy_ev(
        &self,
        _element: &ElementQuery,
        xray_transition: &XrayTransitionQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        let transition = self.xray_transition(xray_transition).await?;
        self.energies
            .get(&transition)
            .copied()
            .ok_or_else(|| not_found("energy"))
    }

    async fn xray_transition_probability(
        &self,
        _element: &ElementQuery,
        xray_transition: &XrayTransitionQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        let transition = self.xray_transition(xray_transition).await?;
        self.probabilities
            .get(&transition)
            .copied()
            .ok_or_else(|| not_found("probability"))
    }

    async fn xray_transition_relative_weight(
        &self,
        _element: &ElementQuery,
        _xray_transition: &XrayTransitionQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        Err(not_found("relative weight"))
    }

    async fn xray_transitionset(
        &self,
        xray_transitionset: &XrayTransitionSetQuery,
    ) -> Result<XrayTransitionSet, DatabaseError> {
        match xray_transitionset {
            XrayTransitionSetQuery::Notation(n) if n == "K-L(2,3)" => Ok(Self::ka_set()),
            XrayTransitionSetQuery::Transitions(ts) => {
                let set = XrayTransitionSet::new(ts.iter().copied())?;
                if set == Self::ka_set() {
                    Ok(set)
                } else {
                    Err(not_found("set"))
                }
            }
            XrayTransitionSetQuery::Notation(_) => Err(not_found("set")),
        }
    }

    async fn xray_transitionset_notation(
        &self,
        xray_transitionset: &XrayTransitionSetQuery,
        notation: &str,
        _encoding: Encoding,
        _reference: Option<&str>,
    ) -> Result<String, DatabaseError> {
        self.xray_transitionset(xray_transitionset).await?;
        if notation == "iupac" {
            Ok("K-L(2,3)".to_string())
        } else {
            Err(not_found("set notation"))
        }
    }

    async fn xray_transitionset_energy_ev(
        &self,
        _element: &ElementQuery,
        xray_transitionset: &XrayTransitionSetQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        self.xray_transitionset(xray_transitionset).await?;
        Ok(6399.47)
    }

    async fn xray_transitionset_relative_weight(
        &self,
        _element: &ElementQuery,
        _xray_transitionset: &XrayTransitionSetQuery,
        _reference: Option<&str>,
    ) -> Result<f64, DatabaseError> {
        Err(not_found("set relative weight"))
    }

    fn default_reference(&self, property: &str) -> Result<Option<String>, DatabaseError> {
        self.defaults.get(property)
    }

    fn set_default_reference(
        &self,
        property: &str,
        reference: Option<&str>,
    ) -> Result<(), DatabaseError> {
        self.defaults.set(property, reference)
    }
}

struct MemorySettings(std::sync::Mutex<Settings>);

#[async_trait]
impl SettingsRepository for MemorySettings {
    async fn load(&self) -> Result<Settings, RepositoryError> {
        Ok(self.0.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
        *self.0.lock().unwrap() = settings.clone();
        Ok(())
    }
}

fn core_with(settings: Settings) -> (AppCore, Arc<MockDatabase>) {
    let db = Arc::new(MockDatabase::new());
    let repos = Repos::new(
        db.clone(),
        Arc::new(MemorySettings(std::sync::Mutex::new(settings))),
    );
    (AppCore::new(repos), db)
}

#[tokio::test]
async fn test_element_summary_tolerates_missing_values() {
    let (core, _) = core_with(Settings::with_defaults());

    let summary = core
        .xray()
        .element_summary(&"fe".into(), "en")
        .await
        .unwrap();
    assert_eq!(summary.element.z(), 26);
    assert_eq!(summary.symbol.as_deref(), Some("Fe"));
    assert_eq!(summary.name, None);
    assert_eq!(summary.atomic_weight, Some(55.845));

    let missing = core.xray().element_summary(&"Xx".into(), "en").await;
    assert!(matches!(
        missing,
        Err(CoreError::Database(DatabaseError::NotFound(_)))
    ));
}

#[tokio::test]
async fn test_xray_line_from_transition_notation() {
    let (core, _) = core_with(Settings::with_defaults());

    let line = core
        .xray()
        .xray_line(&26u8.into(), &"K-L3".into(), None)
        .await
        .unwrap();
    assert_eq!(line.transitions, vec![ka1()]);
    assert_eq!(line.iupac, "K-L3");
    assert_eq!(line.siegbahn, "Ka1");
    assert!((line.energy_ev - 6403.84).abs() < 1e-9);
}

#[tokio::test]
async fn test_xray_line_falls_back_to_transition_set() {
    let (core, _) = core_with(Settings::with_defaults());

    let line = core
        .xray()
        .xray_line(&26u8.into(), &XrayLineQuery::from("K-L(2,3)"), None)
        .await
        .unwrap();
    assert_eq!(line.transitions.len(), 2);
    // No siegbahn notation: falls back to iupac
    assert_eq!(line.siegbahn, "K-L(2,3)");
    assert!((line.energy_ev - 6399.47).abs() < 1e-9);
}

#[tokio::test]
async fn test_mass_density_unit_conversion() {
    let db = MockDatabase::new();
    let density = db
        .element_mass_density_g_per_cm3(&26u8.into(), None)
        .await
        .unwrap();
    assert!((density - 7.874).abs() < 1e-9);
    assert_eq!(db.element_atomic_number(&"Fe".into()).await.unwrap(), 26);
}

#[tokio::test]
async fn test_transitions_sorted_by_energy() {
    let (core, _) = core_with(Settings::with_defaults());

    let transitions = core.xray().transitions_of(&26u8.into(), None).await.unwrap();
    let order: Vec<_> = transitions.iter().map(|t| t.transition).collect();
    assert_eq!(order, vec![ka1(), ka2()]);
    assert_eq!(transitions[0].iupac.as_deref(), Some("K-L3"));
    assert_eq!(transitions[1].probability, Some(0.29));
}

#[tokio::test]
async fn test_numeric_property_dispatch() {
    let (core, _) = core_with(Settings::with_defaults());
    let xray = core.xray();

    let weight = xray
        .numeric_property(PropertyKind::ElementAtomicWeight, &26u8.into(), None, None)
        .await
        .unwrap();
    assert!((weight - 55.845).abs() < 1e-9);

    let binding = xray
        .numeric_property(
            PropertyKind::AtomicSubshellBindingEnergy,
            &26u8.into(),
            Some("1,0,1"),
            None,
        )
        .await
        .unwrap();
    assert!((binding - 7112.0).abs() < 1e-9);

    let missing_target = xray
        .numeric_property(PropertyKind::XrayTransitionEnergy, &26u8.into(), None, None)
        .await;
    assert!(matches!(missing_target, Err(CoreError::Validation(_))));

    let not_numeric = xray
        .numeric_property(PropertyKind::ElementSymbol, &26u8.into(), None, None)
        .await;
    assert!(matches!(not_numeric, Err(CoreError::Validation(_))));
}

#[tokio::test]
async fn test_apply_settings_sets_default_references() {
    let mut settings = Settings::with_defaults();
    settings
        .default_references
        .insert("element_symbol".to_string(), "doe2016".to_string());
    let (core, db) = core_with(settings);

    core.apply_settings().await.unwrap();
    assert_eq!(
        db.default_reference("element_symbol").unwrap(),
        Some("doe2016".to_string())
    );
    assert!(matches!(
        db.default_reference("foo"),
        Err(DatabaseError::UnknownProperty(_))
    ));
}

#[tokio::test]
async fn test_get_default_settings() {
    let (core, _) = core_with(Settings::with_defaults());

    let settings = core.settings().get().await.unwrap();
    assert_eq!(settings.default_language.as_deref(), Some("en"));
    assert!(settings.default_references.is_empty());
}

#[tokio::test]
async fn test_settings_update_reaches_running_database() {
    let (core, db) = core_with(Settings::with_defaults());

    let mut update = SettingsUpdate::default();
    update.default_references.insert(
        "xray_transition_energy_ev".to_string(),
        Some("bearden1967".to_string()),
    );
    let updated = core.settings().update(update).await.unwrap();
    assert_eq!(
        updated.default_references.get("xray_transition_energy"),
        Some(&"bearden1967".to_string())
    );
    assert_eq!(core.settings().get().await.unwrap(), updated);
    assert_eq!(
        db.default_reference("xray_transition_energy").unwrap(),
        Some("bearden1967".to_string())
    );

    let mut update = SettingsUpdate::default();
    update
        .default_references
        .insert("xray_transition_energy".to_string(), None);
    core.settings().update(update).await.unwrap();
    assert_eq!(db.default_reference("xray_transition_energy").unwrap(), None);
}

#[tokio::test]
async fn test_settings_save_clears_dropped_references() {
    let mut settings = Settings::with_defaults();
    settings
        .default_references
        .insert("element_symbol".to_string(), "doe2016".to_string());
    let (core, db) = core_with(settings);
    core.apply_settings().await.unwrap();

    let mut replacement = Settings::with_defaults();
    replacement
        .default_references
        .insert("element_atomic_weight".to_string(), "roe2020".to_string());
    core.settings().save(&replacement).await.unwrap();

    assert_eq!(db.default_reference("element_symbol").unwrap(), None);
    assert_eq!(
        db.default_reference("element_atomic_weight").unwrap(),
        Some("roe2020".to_string())
    );
}

#[tokio::test]
async fn test_invalid_update_changes_nothing() {
    let (core, db) = core_with(Settings::with_defaults());

    let mut update = SettingsUpdate::default();
    update
        .default_references
        .insert("foo".to_string(), Some("doe2016".to_string()));
    update
        .default_references
        .insert("element_symbol".to_string(), Some("doe2016".to_string()));

    assert!(matches!(
        core.settings().update(update).await,
        Err(CoreError::Settings(_))
    ));
    assert!(core.settings().get().await.unwrap().default_references.is_empty());
    assert_eq!(db.default_reference("element_symbol").unwrap(), None);
}
