// error_chain generates undocumented items.
#![allow(missing_docs)]

error_chain! {
    errors {
        InvalidVertexReference(slot: usize, vertex_count: usize) {
            description("a vertex reference was out of range")
            display("invalid vertex reference {} in a graph with {} vertices", slot, vertex_count)
        }
    }
}

/// Returns an `InvalidVertexReference` error if `slot` does not address one of the `vertex_count` vertices.
pub(crate) fn check_vertex_reference(slot: usize, vertex_count: usize) -> Result<()> {
    if slot < vertex_count {
        Ok(())
    } else {
        bail!(ErrorKind::InvalidVertexReference(slot, vertex_count))
    }
}
