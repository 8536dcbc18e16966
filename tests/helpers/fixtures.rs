//! Common environments used across tests.

use aas::model::{
    AdministrationShell, AssetInformation, AssetKind, ConceptDescription, Key, KeyKind, NodeId,
    SemanticId, Submodel, SubmodelElement,
};
use aas::{Environment, Reference};

pub const SM_ID: &str = "urn:sm:1";
pub const SHELL_ID: &str = "urn:aas:1";
pub const ASSET_ID: &str = "urn:asset:pump-7";
pub const CD_ID: &str = "urn:cd:temperature";

/// `Submodel{id:"SM1"}` holding `Coll1` with one Property `P1`.
pub struct CollectionScenario {
    pub env: Environment,
    pub submodel: NodeId,
    pub coll1: NodeId,
    pub p1: NodeId,
}

pub fn collection_scenario() -> CollectionScenario {
    let mut env = Environment::new();
    let submodel = env.add_submodel(Submodel::new("SM1", "SM1")).unwrap();
    let coll1 = env
        .add_element(submodel, SubmodelElement::collection("Coll1"))
        .unwrap();
    let p1 = env
        .add_element(coll1, SubmodelElement::property("P1", "int", "1"))
        .unwrap();
    CollectionScenario {
        env,
        submodel,
        coll1,
        p1,
    }
}

/// A shell describing an asset, one referenced submodel with a Temperature
/// property pointing at a concept description.
pub struct PlantScenario {
    pub env: Environment,
    pub shell: NodeId,
    pub submodel: NodeId,
    pub temperature: NodeId,
    pub concept: NodeId,
}

pub fn plant_scenario() -> PlantScenario {
    let mut env = Environment::new();
    let shell = env
        .add_shell(
            AdministrationShell::new(SHELL_ID, "Pump7")
                .with_asset(AssetInformation::new(AssetKind::Instance, ASSET_ID)),
        )
        .unwrap();
    let submodel = env
        .add_submodel_to_shell(shell, Submodel::new(SM_ID, "OperationalData"))
        .unwrap();
    let temperature = env
        .add_element(
            submodel,
            SubmodelElement::property("Temperature", "double", "42.5")
                .with_semantic_id(SemanticId::global(CD_ID)),
        )
        .unwrap();
    let concept = env
        .add_concept_description(ConceptDescription::new(CD_ID, "Temperature"))
        .unwrap();
    PlantScenario {
        env,
        shell,
        submodel,
        temperature,
        concept,
    }
}

/// Model reference `[Submodel:<id>, <id_shorts>...]`.
pub fn submodel_path(submodel_id: &str, id_shorts: &[&str]) -> Reference {
    let mut keys = vec![Key::new(KeyKind::Submodel, submodel_id)];
    keys.extend(
        id_shorts
            .iter()
            .map(|s| Key::new(KeyKind::SubmodelElement, *s)),
    );
    Reference::model(keys)
}
