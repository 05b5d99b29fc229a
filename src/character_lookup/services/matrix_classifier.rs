use crate::character_lookup::domain::{CoreType, MatrixBuckets, VCoreEquipment};

/// MatrixClassifier - Partitions equipped matrix cores by category
pub struct MatrixClassifier;

impl MatrixClassifier {
    /// Routes each core into the bucket named by its `v_core_type`.
    ///
    /// Relative order is preserved inside every bucket. Cores with a tag
    /// outside Enhancement/Skill/Special are dropped without error.
    pub fn classify(cores: Vec<VCoreEquipment>) -> MatrixBuckets {
        let total = cores.len();
        let mut buckets = MatrixBuckets::default();

        for core in cores {
            match core.core_type() {
                Some(CoreType::Enhancement) => buckets.enhancement.push(core),
                Some(CoreType::Skill) => buckets.skill.push(core),
                Some(CoreType::Special) => buckets.special.push(core),
                None => {}
            }
        }

        let dropped = total - buckets.total();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped matrix cores with unrecognized type");
        }

        buckets
    }
}
