use super::Strings;

pub const STRINGS: Strings = Strings {
    previous: "Anterior",
    next: "Siguiente",
    loading: "Cargando imagen...",
    image_unavailable: "Imagen no disponible",
};
