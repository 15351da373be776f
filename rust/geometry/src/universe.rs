// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Import of a CAD-derived geometry file as one universe.
//!
//! A [`DagUniverse`] loads a mesh model, assigns every volume a cell and
//! every surface a surface record, and appends them to the [`Model`]. The
//! import is staged: materials, cells and surfaces are only committed once
//! every volume and surface has been resolved, so a failed import leaves the
//! model as it was.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use dagmc_lite_topology::{
    Dimension, EntityHandle, MeshArena, MeshModel, PropertyParser, DEFAULT_DELIMITERS,
};

use crate::boundary::classify_boundary;
use crate::cell::{Cell, CellGeometry, Surface, SurfaceGeometry};
use crate::config::{DagUniverseConfig, UniverseParams};
use crate::error::{Error, Result};
use crate::ids::{check_collisions, next_material_id, IdAllocator};
use crate::library::MaterialLibrary;
use crate::material::Material;
use crate::model::Model;
use crate::range::condensed_ranges;
use crate::resolver::{is_graveyard_tag, resolve_sqrt_kt, MaterialResolver};
use crate::settings::{Settings, MATERIAL_VOID};

/// Property keys read from the mesh metadata.
pub const MATERIAL_KEY: &str = "material";
pub const BOUNDARY_KEY: &str = "boundary";
pub const TEMPERATURE_KEY: &str = "temp";
pub const DENSITY_KEY: &str = "density";

/// Non-fatal conditions found during import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportWarning {
    /// No volume is tagged as graveyard, so particles can escape to infinity.
    MissingGraveyard,
}

impl std::fmt::Display for ImportWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportWarning::MissingGraveyard => write!(
                f,
                "No graveyard volume found in the DagMC model. This may result in lost \
                 particles and rapid simulation failure."
            ),
        }
    }
}

/// Parser for the group-name metadata of a geometry file.
pub fn property_parser() -> PropertyParser {
    PropertyParser::new(
        [MATERIAL_KEY, BOUNDARY_KEY, TEMPERATURE_KEY, DENSITY_KEY],
        DEFAULT_DELIMITERS,
    )
    .with_synonym("mat", MATERIAL_KEY)
    .with_synonym("rho", DENSITY_KEY)
}

/// A universe built from a mesh-based geometry file.
#[derive(Debug)]
pub struct DagUniverse {
    id: i32,
    filename: PathBuf,
    adjust_geometry_ids: bool,
    adjust_material_ids: bool,
    mesh: Arc<dyn MeshModel>,
    material_library: Option<MaterialLibrary>,
    graveyard: Option<EntityHandle>,
    cell_index_offset: usize,
    surface_index_offset: usize,
    warnings: Vec<ImportWarning>,
}

impl DagUniverse {
    /// Imports the universe described by a configuration entry.
    pub fn from_config(
        config: &DagUniverseConfig,
        model: &mut Model,
        settings: &Settings,
    ) -> Result<Self> {
        let params = config.validate()?;
        Self::load::<MeshArena>(params, model, settings)
    }

    /// Imports a geometry file under the next free universe ID.
    pub fn from_file(
        filename: impl Into<PathBuf>,
        adjust_geometry_ids: bool,
        adjust_material_ids: bool,
        model: &mut Model,
        settings: &Settings,
    ) -> Result<Self> {
        let id = model
            .max_universe_id()
            .checked_add(1)
            .ok_or(Error::IdSpaceExhausted { kind: "universe" })?;
        let params = UniverseParams {
            id,
            filename: filename.into(),
            adjust_geometry_ids,
            adjust_material_ids,
        };
        Self::load::<MeshArena>(params, model, settings)
    }

    /// Loads the geometry file with mesh implementation `M` and imports it.
    ///
    /// Relative filenames are resolved against `settings.path_input`.
    pub fn load<M>(mut params: UniverseParams, model: &mut Model, settings: &Settings) -> Result<Self>
    where
        M: MeshModel + Default + 'static,
    {
        if params.filename.is_relative() {
            params.filename = settings.path_input.join(&params.filename);
        }
        if !params.filename.exists() {
            return Err(Error::GeometryFileMissing(params.filename));
        }

        let mut mesh = M::default();
        mesh.load_file(&params.filename)?;
        let library = MaterialLibrary::from_file(&params.filename)?;
        Self::initialize(params, mesh, Some(library), model, settings)
    }

    /// Imports an already loaded mesh model.
    pub fn initialize<M>(
        params: UniverseParams,
        mut mesh: M,
        library: Option<MaterialLibrary>,
        model: &mut Model,
        settings: &Settings,
    ) -> Result<Self>
    where
        M: MeshModel + 'static,
    {
        let universe = params.id;
        if model.universe_map.contains_key(&universe) {
            return Err(Error::UniverseIdCollision { id: universe });
        }

        mesh.accelerate()?;

        let mut library = library.filter(|lib| !lib.is_empty());
        let mut new_materials = Vec::new();
        if let Some(lib) = library.as_mut() {
            info!(
                universe,
                materials = lib.len(),
                "found a material library in the DAGMC file"
            );
            if params.adjust_material_ids {
                lib.renumber(next_material_id(model)?)?;
            }
            new_materials = lib.to_materials()?;
            check_material_ids(model, &new_materials)?;
        }

        mesh.parse_properties(&property_parser())?;
        let mesh: Arc<dyn MeshModel> = Arc::new(mesh);

        let allocator = IdAllocator::new(model, params.adjust_geometry_ids);
        let resolver = MaterialResolver::new(library.as_ref(), &model.materials);

        // Volumes
        let cell_ids = allocator.allocate(mesh.as_ref(), Dimension::Volume)?;
        check_collisions(model, Dimension::Volume, &cell_ids, universe)?;

        let mut cells = Vec::with_capacity(cell_ids.len());
        let mut graveyard: Option<(EntityHandle, i32)> = None;
        for (index, &cell_id) in cell_ids.iter().enumerate() {
            let handle = entity_at(mesh.as_ref(), Dimension::Volume, index)?;
            let tag = mesh.property_value(handle, MATERIAL_KEY).unwrap_or_default();

            if is_graveyard_tag(&tag) {
                if let Some((_, first)) = graveyard {
                    return Err(Error::DuplicateGraveyard {
                        first,
                        second: cell_id,
                    });
                }
                graveyard = Some((handle, cell_id));
            }

            let material = resolver.resolve(&tag, cell_id)?;
            let sqrt_kt = if material == MATERIAL_VOID {
                Vec::new()
            } else {
                let mat = new_materials
                    .iter()
                    .find(|m| m.id == material)
                    .or_else(|| model.material(material))
                    .ok_or(Error::UnknownMaterialId {
                        id: material,
                        cell: cell_id,
                    })?;
                let explicit = mesh.property_value(handle, TEMPERATURE_KEY);
                vec![resolve_sqrt_kt(
                    explicit.as_deref(),
                    mat,
                    settings.temperature_default,
                    cell_id,
                )?]
            };

            cells.push(Cell {
                id: cell_id,
                universe,
                fill: None,
                material: vec![material],
                sqrt_kt,
                geometry: CellGeometry::Dag {
                    dag_index: index,
                    mesh: Arc::clone(&mesh),
                },
            });
        }

        let mut warnings = Vec::new();
        if graveyard.is_none() {
            warn!(universe, "{}", ImportWarning::MissingGraveyard);
            warnings.push(ImportWarning::MissingGraveyard);
        }
        let graveyard = graveyard.map(|(handle, _)| handle);

        // Surfaces
        let surface_ids = allocator.allocate(mesh.as_ref(), Dimension::Surface)?;
        check_collisions(model, Dimension::Surface, &surface_ids, universe)?;

        let mut surfaces = Vec::with_capacity(surface_ids.len());
        for (index, &surface_id) in surface_ids.iter().enumerate() {
            let handle = entity_at(mesh.as_ref(), Dimension::Surface, index)?;
            let tag = mesh.property_value(handle, BOUNDARY_KEY).unwrap_or_default();
            let bounds_graveyard = match graveyard {
                Some(g) => mesh.parent_volumes(handle)?.contains(&g),
                None => false,
            };
            let bc = classify_boundary(&tag, surface_id, bounds_graveyard)?;

            surfaces.push(Surface {
                id: surface_id,
                bc,
                geometry: SurfaceGeometry::Dag {
                    dag_index: index,
                    mesh: Arc::clone(&mesh),
                },
            });
        }

        // Commit
        for material in new_materials {
            model.add_material(material)?;
        }
        let cell_index_offset = model.cells.len();
        let n_cells = cells.len();
        for cell in cells {
            model.add_cell(cell)?;
        }
        let surface_index_offset = model.surfaces.len();
        let n_surfaces = surfaces.len();
        for surface in surfaces {
            model.add_surface(surface)?;
        }
        if settings.check_overlaps {
            model.overlap_check_count.resize(model.cells.len(), 0);
        }

        info!(
            universe,
            file = %params.filename.display(),
            cells = n_cells,
            surfaces = n_surfaces,
            "loaded DAGMC universe"
        );

        Ok(Self {
            id: universe,
            filename: params.filename,
            adjust_geometry_ids: params.adjust_geometry_ids,
            adjust_material_ids: params.adjust_material_ids,
            mesh,
            material_library: library,
            graveyard,
            cell_index_offset,
            surface_index_offset,
            warnings,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn adjust_geometry_ids(&self) -> bool {
        self.adjust_geometry_ids
    }

    pub fn adjust_material_ids(&self) -> bool {
        self.adjust_material_ids
    }

    /// Returns the shared mesh model.
    pub fn mesh(&self) -> &Arc<dyn MeshModel> {
        &self.mesh
    }

    /// Returns `true` if materials were assigned from the bundled library.
    pub fn uses_material_library(&self) -> bool {
        self.material_library.is_some()
    }

    pub fn material_library(&self) -> Option<&MaterialLibrary> {
        self.material_library.as_ref()
    }

    /// Renders the bundled library as a materials XML document.
    ///
    /// Returns `Ok(None)` if the universe has no library.
    pub fn material_library_xml(&self) -> Result<Option<String>> {
        self.material_library
            .as_ref()
            .map(MaterialLibrary::to_xml)
            .transpose()
    }

    /// Writes the bundled library as a materials XML document.
    pub fn write_material_library_xml(&self, path: &Path) -> Result<()> {
        let library = self
            .material_library
            .as_ref()
            .ok_or(Error::NoMaterialLibrary)?;
        let xml = library.to_xml()?;
        std::fs::write(path, xml).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Condensed listing of the mesh's native IDs for a dimension.
    pub fn native_id_ranges(&self, dimension: Dimension) -> Result<String> {
        let n = self.mesh.num_entities(dimension);
        condensed_ranges((0..n).filter_map(|i| self.mesh.id_by_index(dimension, i)))
    }

    /// Returns the graveyard volume, if one was tagged.
    pub fn graveyard(&self) -> Option<EntityHandle> {
        self.graveyard
    }

    pub fn has_graveyard(&self) -> bool {
        self.graveyard.is_some()
    }

    /// Non-fatal conditions found during import.
    pub fn warnings(&self) -> &[ImportWarning] {
        &self.warnings
    }

    /// Index in [`Model::cells`] of the first cell of this universe.
    pub fn cell_index_offset(&self) -> usize {
        self.cell_index_offset
    }

    /// Index in [`Model::surfaces`] of the first surface of this universe.
    pub fn surface_index_offset(&self) -> usize {
        self.surface_index_offset
    }

    /// Maps a mesh volume index to its index in [`Model::cells`].
    pub fn cell_index(&self, dag_index: usize) -> usize {
        self.cell_index_offset + dag_index
    }

    /// Maps a mesh surface index to its index in [`Model::surfaces`].
    pub fn surface_index(&self, dag_index: usize) -> usize {
        self.surface_index_offset + dag_index
    }

    pub fn num_cells(&self) -> usize {
        self.mesh.num_entities(Dimension::Volume)
    }

    pub fn num_surfaces(&self) -> usize {
        self.mesh.num_entities(Dimension::Surface)
    }
}

fn entity_at(mesh: &dyn MeshModel, dimension: Dimension, index: usize) -> Result<EntityHandle> {
    mesh.entity_by_index(dimension, index)
        .ok_or_else(|| dagmc_lite_topology::Error::IndexOutOfRange { dimension, index }.into())
}

fn check_material_ids(model: &Model, materials: &[Material]) -> Result<()> {
    let mut seen = rustc_hash::FxHashSet::default();
    for material in materials {
        if model.material_map.contains_key(&material.id) || !seen.insert(material.id) {
            return Err(Error::MaterialIdCollision { id: material.id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryCondition;
    use crate::library::LibraryMaterial;
    use crate::settings::sqrt_kt;
    use approx::assert_relative_eq;

    fn params(id: i32, adjust_geometry_ids: bool) -> UniverseParams {
        UniverseParams {
            id,
            filename: PathBuf::from("model.json"),
            adjust_geometry_ids,
            adjust_material_ids: false,
        }
    }

    fn single_volume(volume_id: i32, surface_id: i32, material: &str) -> MeshArena {
        let mut arena = MeshArena::new();
        let v = arena.add_volume(volume_id);
        let s = arena.add_surface(surface_id);
        arena.link_surface(v, s).unwrap();
        arena.add_group(&format!("mat:{material}"), vec![v.into()]);
        arena
    }

    #[test]
    fn void_volume_end_to_end() {
        let mut model = Model::new();
        let mesh = single_volume(5, 7, "void");
        let universe =
            DagUniverse::initialize(params(1, false), mesh, None, &mut model, &Settings::default())
                .unwrap();

        assert_eq!(model.cells.len(), 1);
        let cell = &model.cells[0];
        assert_eq!(cell.id, 5);
        assert_eq!(cell.material, vec![MATERIAL_VOID]);
        assert!(cell.sqrt_kt.is_empty());
        assert_eq!(cell.universe, 1);
        assert_eq!(cell.dag_index(), Some(0));

        assert_eq!(model.surfaces.len(), 1);
        assert_eq!(model.surfaces[0].id, 7);
        assert_eq!(model.surfaces[0].bc, None);

        assert_eq!(universe.warnings(), &[ImportWarning::MissingGraveyard]);
        assert!(!universe.has_graveyard());
        assert!(!universe.uses_material_library());
    }

    #[test]
    fn graveyard_surfaces_become_vacuum() {
        let mut arena = MeshArena::new();
        let inner = arena.add_volume(1);
        let outer = arena.add_volume(2);
        let shared = arena.add_surface(10);
        let free = arena.add_surface(11);
        arena.link_surface(inner, shared).unwrap();
        arena.link_surface(outer, shared).unwrap();
        arena.link_surface(inner, free).unwrap();
        arena.add_group("mat:void", vec![inner.into()]);
        arena.add_group("mat:Graveyard", vec![outer.into()]);
        arena.add_group("boundary:reflective", vec![shared.into(), free.into()]);

        let mut model = Model::new();
        let universe = DagUniverse::initialize(
            params(1, false),
            arena,
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap();

        assert!(universe.has_graveyard());
        assert!(universe.warnings().is_empty());
        assert_eq!(model.surface(10).unwrap().bc, Some(BoundaryCondition::Vacuum));
        assert_eq!(
            model.surface(11).unwrap().bc,
            Some(BoundaryCondition::Reflective)
        );
    }

    #[test]
    fn second_graveyard_is_rejected() {
        let mut arena = MeshArena::new();
        let a = arena.add_volume(1);
        let b = arena.add_volume(2);
        arena.add_group("mat:graveyard", vec![a.into(), b.into()]);

        let mut model = Model::new();
        let err = DagUniverse::initialize(
            params(1, false),
            arena,
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateGraveyard { first: 1, second: 2 }));
        assert!(model.cells.is_empty());
    }

    #[test]
    fn native_id_collision_leaves_model_untouched() {
        let mut model = Model::new();
        model.add_cell(Cell::csg(42, 0, MATERIAL_VOID, vec![-1])).unwrap();

        let mut arena = MeshArena::new();
        for id in [40, 41, 42] {
            let v = arena.add_volume(id);
            arena.add_group("mat:void", vec![v.into()]);
        }

        let err = DagUniverse::initialize(
            params(3, false),
            arena,
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap_err();
        match &err {
            Error::CellIdCollision { id, universe, ids } => {
                assert_eq!(*id, 42);
                assert_eq!(*universe, 3);
                assert_eq!(ids, "40-42");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(model.cells.len(), 1);
        assert_eq!(model.cell_map.len(), 1);
        assert!(model.surfaces.is_empty());
    }

    #[test]
    fn renumbering_assigns_sequential_ids() {
        let mut arena = MeshArena::new();
        for id in [30, 10, 20] {
            let v = arena.add_volume(id);
            arena.add_group("mat:void", vec![v.into()]);
        }
        let mut model = Model::new();
        DagUniverse::initialize(params(1, true), arena, None, &mut model, &Settings::default())
            .unwrap();

        let ids: Vec<i32> = model.cells.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn legacy_materials_and_temperatures() {
        let mut model = Model::new();
        model.add_material(Material::new(1, "Water")).unwrap();
        model
            .add_material(Material::new(2, "Steel").with_temperature(900.0))
            .unwrap();

        let mut arena = MeshArena::new();
        let water = arena.add_volume(1);
        let steel = arena.add_volume(2);
        let by_id = arena.add_volume(3);
        arena.add_group("mat:water/temp:600", vec![water.into()]);
        arena.add_group("mat:Steel", vec![steel.into()]);
        arena.add_group("mat:1", vec![by_id.into()]);

        let settings = Settings::default();
        DagUniverse::initialize(params(1, false), arena, None, &mut model, &settings).unwrap();

        let water = model.cell(1).unwrap();
        assert_eq!(water.material, vec![1]);
        assert_relative_eq!(water.sqrt_kt[0], sqrt_kt(600.0));

        let steel = model.cell(2).unwrap();
        assert_eq!(steel.material, vec![2]);
        assert_relative_eq!(steel.sqrt_kt[0], sqrt_kt(900.0));

        let by_id = model.cell(3).unwrap();
        assert_eq!(by_id.material, vec![1]);
        assert_relative_eq!(by_id.sqrt_kt[0], sqrt_kt(settings.temperature_default));
    }

    #[test]
    fn unknown_numeric_material_fails_on_dereference() {
        let mut arena = MeshArena::new();
        let v = arena.add_volume(1);
        arena.add_group("mat:99", vec![v.into()]);

        let mut model = Model::new();
        let err = DagUniverse::initialize(
            params(1, false),
            arena,
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownMaterialId { id: 99, cell: 1 }));
    }

    #[test]
    fn untagged_volume_is_an_error() {
        let mut arena = MeshArena::new();
        arena.add_volume(8);
        let mut model = Model::new();
        let err = DagUniverse::initialize(
            params(1, false),
            arena,
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingMaterial { cell: 8 }));
    }

    #[test]
    fn library_materials_are_renumbered_and_committed() {
        let mut model = Model::new();
        model.add_material(Material::new(4, "existing")).unwrap();

        let mut library = MaterialLibrary::new();
        let mut fuel = LibraryMaterial {
            density: Some(10.4),
            ..Default::default()
        };
        fuel.set_mat_number(1);
        library.insert("fuel", fuel);

        let mut arena = MeshArena::new();
        let v = arena.add_volume(1);
        arena.add_group("mat:fuel", vec![v.into()]);

        let params = UniverseParams {
            adjust_material_ids: true,
            ..params(1, false)
        };
        let universe =
            DagUniverse::initialize(params, arena, Some(library), &mut model, &Settings::default())
                .unwrap();

        assert!(universe.uses_material_library());
        assert_eq!(model.material(5).unwrap().name, "fuel");
        assert_eq!(model.cell(1).unwrap().material, vec![5]);
        let xml = universe.material_library_xml().unwrap().unwrap();
        assert!(xml.contains("<material id=\"5\" name=\"fuel\">"));
    }

    #[test]
    fn library_id_collision() {
        let mut model = Model::new();
        model.add_material(Material::new(1, "existing")).unwrap();

        let mut library = MaterialLibrary::new();
        let mut fuel = LibraryMaterial::default();
        fuel.set_mat_number(1);
        library.insert("fuel", fuel);

        let mut arena = MeshArena::new();
        arena.add_volume(1);
        let err = DagUniverse::initialize(
            params(1, false),
            arena,
            Some(library),
            &mut model,
            &Settings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MaterialIdCollision { id: 1 }));
        assert_eq!(model.materials.len(), 1);
    }

    #[test]
    fn overlap_counters_follow_cells() {
        let settings = Settings {
            check_overlaps: true,
            ..Settings::default()
        };
        let mut model = Model::new();
        DagUniverse::initialize(
            params(1, false),
            single_volume(1, 1, "void"),
            None,
            &mut model,
            &settings,
        )
        .unwrap();
        assert_eq!(model.overlap_check_count, vec![0]);
    }

    #[test]
    fn index_offsets_and_native_ranges() {
        let mut model = Model::new();
        model.add_cell(Cell::csg(100, 0, MATERIAL_VOID, vec![-1])).unwrap();

        let mut arena = MeshArena::new();
        for id in [1, 2, 3, 7] {
            let v = arena.add_volume(id);
            arena.add_group("mat:void", vec![v.into()]);
        }
        let universe = DagUniverse::initialize(
            params(2, false),
            arena,
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(universe.cell_index_offset(), 1);
        assert_eq!(universe.cell_index(3), 4);
        assert_eq!(model.cells[universe.cell_index(3)].id, 7);
        assert_eq!(universe.num_cells(), 4);
        assert_eq!(
            universe.native_id_ranges(Dimension::Volume).unwrap(),
            "1-3, 7"
        );
        assert!(matches!(
            universe.native_id_ranges(Dimension::Surface),
            Err(Error::EmptyIdSet)
        ));
    }

    #[test]
    fn existing_universe_id_is_rejected() {
        let mut model = Model::new();
        model
            .add_universe(crate::model::Universe::Csg(crate::model::CsgUniverse {
                id: 1,
                cells: vec![],
            }))
            .unwrap();
        let err = DagUniverse::initialize(
            params(1, false),
            single_volume(1, 1, "void"),
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::UniverseIdCollision { id: 1 }));
    }

    #[test]
    fn surface_collision_commits_nothing() {
        let mut model = Model::new();
        model.add_material(Material::new(1, "Water")).unwrap();
        model.add_surface(Surface::csg(7, None)).unwrap();

        let mut arena = MeshArena::new();
        let v = arena.add_volume(5);
        let s = arena.add_surface(7);
        arena.link_surface(v, s).unwrap();
        arena.add_group("mat:Water", vec![v.into()]);

        let err = DagUniverse::initialize(
            params(2, false),
            arena,
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap_err();
        match &err {
            Error::SurfaceIdCollision { id, universe, ids } => {
                assert_eq!(*id, 7);
                assert_eq!(*universe, 2);
                assert_eq!(ids, "7");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(model.cells.is_empty());
        assert!(model.cell_map.is_empty());
        assert_eq!(model.materials.len(), 1);
        assert_eq!(model.surfaces.len(), 1);
    }

    #[test]
    fn maximum_existing_cell_id() {
        let mut model = Model::new();
        model.add_cell(Cell::csg(i32::MAX, 0, MATERIAL_VOID, vec![-1])).unwrap();

        DagUniverse::initialize(
            params(1, false),
            single_volume(5, 6, "void"),
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(model.cell(5).unwrap().universe, 1);

        let err = DagUniverse::initialize(
            params(2, true),
            single_volume(8, 9, "void"),
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::IdSpaceExhausted { kind: "cell" }));
        assert_eq!(model.cells.len(), 2);
        assert_eq!(model.surfaces.len(), 1);
    }

    #[test]
    fn material_renumbering_past_the_id_range() {
        let mut model = Model::new();
        model.add_material(Material::new(i32::MAX, "last")).unwrap();

        let mut library = MaterialLibrary::new();
        let mut fuel = LibraryMaterial::default();
        fuel.set_mat_number(1);
        library.insert("fuel", fuel);

        let params = UniverseParams {
            adjust_material_ids: true,
            ..params(1, false)
        };
        let err = DagUniverse::initialize(
            params,
            single_volume(1, 1, "fuel"),
            Some(library),
            &mut model,
            &Settings::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::IdSpaceExhausted { kind: "material" }));
        assert_eq!(model.materials.len(), 1);
    }

    #[test]
    fn no_library_means_no_export() {
        let mut model = Model::new();
        let universe = DagUniverse::initialize(
            params(1, false),
            single_volume(1, 1, "void"),
            None,
            &mut model,
            &Settings::default(),
        )
        .unwrap();
        assert!(universe.material_library_xml().unwrap().is_none());
        let err = universe
            .write_material_library_xml(Path::new("unused.xml"))
            .unwrap_err();
        assert!(matches!(err, Error::NoMaterialLibrary));
    }
}
