use super::common::{KeyValueSet, TraceKey};
use super::error::{Error, Result};
use crate::proto::google::firestore::v1::{value::ValueType, Value};
use serde::de::{
    self, value::StringDeserializer, DeserializeSeed, EnumAccess, IntoDeserializer, MapAccess,
    SeqAccess, VariantAccess, Visitor,
};
use serde::Deserialize;
use std::{collections::HashMap, iter::Peekable, mem};

/// Deserializes `T` from the fields of a Firestore document.
pub fn from_fields<'a, T>(input: HashMap<String, Value>) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_fields(input);
    T::deserialize(&mut deserializer)
}

pub struct Deserializer {
    processing_bundle: DeserializerBundle,
    bundle_stack: Vec<DeserializerBundle>,
}

impl Deserializer {
    pub fn from_fields(input: HashMap<String, Value>) -> Self {
        Deserializer {
            processing_bundle: DeserializerBundle::root(input),
            bundle_stack: Vec::new(),
        }
    }
}

enum DeserializerBundle {
    Map(MapDeserializerBundle),
    Array(ArrayDeserializerBundle),
}

struct MapDeserializerBundle {
    key: TraceKey,
    entries: Peekable<std::collections::hash_map::IntoIter<String, Value>>,
    popped_value: Option<KeyValueSet>,
}

struct ArrayDeserializerBundle {
    key: TraceKey,
    values: Peekable<std::vec::IntoIter<Value>>,
}

impl DeserializerBundle {
    fn map(key: &TraceKey, input: HashMap<String, Value>) -> Self {
        DeserializerBundle::Map(MapDeserializerBundle {
            key: key.clone(),
            entries: input.into_iter().peekable(),
            popped_value: None,
        })
    }

    fn array(key: &TraceKey, input: Vec<Value>) -> Self {
        DeserializerBundle::Array(ArrayDeserializerBundle {
            key: key.clone(),
            values: input.into_iter().peekable(),
        })
    }

    fn root(input: HashMap<String, Value>) -> Self {
        DeserializerBundle::Map(MapDeserializerBundle {
            key: TraceKey::Root,
            entries: HashMap::new().into_iter().peekable(),
            popped_value: Some(KeyValueSet(TraceKey::Root, Value::from_fields(input))),
        })
    }
}

enum BundleElement {
    Key(String),
    Value(KeyValueSet),
    EndOfBundle,
}

impl BundleElement {
    fn key_value_set(self) -> Result<KeyValueSet> {
        match self {
            BundleElement::Value(key_value_set) => Ok(key_value_set),
            BundleElement::Key(key) => Err(Error::Message(format!(
                "a value was expected, but the map key {:?} was found",
                key
            ))),
            BundleElement::EndOfBundle => Err(Error::Eof),
        }
    }
}

enum PeekedBundleElement<'a> {
    Key,
    Value(&'a Value),
    EndOfBundle,
}

impl Deserializer {
    fn pop(&mut self) -> Result<BundleElement> {
        fn pop_bundle_stack(de: &mut Deserializer) -> Result<BundleElement> {
            match de.bundle_stack.pop() {
                None => Err(Error::Eof),
                Some(bundle) => {
                    de.processing_bundle = bundle;
                    Ok(BundleElement::EndOfBundle)
                }
            }
        }
        match self.processing_bundle {
            DeserializerBundle::Map(ref mut bundle) => match bundle.popped_value.take() {
                Some(value) => Ok(BundleElement::Value(value)),
                None => match bundle.entries.next() {
                    None => pop_bundle_stack(self),
                    Some((key, value)) => {
                        bundle.popped_value = Some(KeyValueSet(bundle.key.child(&key), value));
                        Ok(BundleElement::Key(key))
                    }
                },
            },
            DeserializerBundle::Array(ref mut bundle) => match bundle.values.next() {
                None => pop_bundle_stack(self),
                Some(value) => Ok(BundleElement::Value(KeyValueSet(
                    bundle.key.element(),
                    value,
                ))),
            },
        }
    }

    fn peek(&mut self) -> Result<PeekedBundleElement> {
        fn peek_bundle_stack(
            bundle_stack: &[DeserializerBundle],
        ) -> Result<PeekedBundleElement<'static>> {
            match bundle_stack.last() {
                None => Err(Error::Eof),
                Some(_) => Ok(PeekedBundleElement::EndOfBundle),
            }
        }
        match self.processing_bundle {
            DeserializerBundle::Map(ref mut bundle) => match bundle.popped_value {
                Some(KeyValueSet(_, ref value)) => Ok(PeekedBundleElement::Value(value)),
                None => match bundle.entries.peek() {
                    None => peek_bundle_stack(&self.bundle_stack),
                    Some(_) => Ok(PeekedBundleElement::Key),
                },
            },
            DeserializerBundle::Array(ref mut bundle) => match bundle.values.peek() {
                None => peek_bundle_stack(&self.bundle_stack),
                Some(value) => Ok(PeekedBundleElement::Value(value)),
            },
        }
    }

    fn push_bundle(&mut self, bundle: DeserializerBundle) {
        let replaced = mem::replace(&mut self.processing_bundle, bundle);
        self.bundle_stack.push(replaced);
    }

    fn get_bool(&mut self) -> Result<bool> {
        let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
        if let Some(ValueType::BooleanValue(value)) = value.value_type {
            Ok(value)
        } else {
            Err(Error::ExpectedBoolean(key, value))
        }
    }

    fn get_string(&mut self) -> Result<String> {
        match self.pop()? {
            BundleElement::Key(key) => Ok(key),
            BundleElement::Value(KeyValueSet(key, value)) => match value.value_type {
                Some(ValueType::StringValue(value)) | Some(ValueType::ReferenceValue(value)) => {
                    Ok(value)
                }
                _ => Err(Error::ExpectedString(key, value)),
            },
            BundleElement::EndOfBundle => Err(Error::Eof),
        }
    }

    fn get_unsigned<T>(&mut self) -> Result<T>
    where
        T: TryFrom<u64>,
    {
        let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
        match value.integer_value() {
            Some(i) => match u64::try_from(i) {
                Ok(u) => T::try_from(u).or(Err(Error::CouldNotConvertNumber(key, value))),
                Err(_) => Err(Error::CouldNotConvertNumber(key, value)),
            },
            None => Err(Error::ExpectedInteger(key, value)),
        }
    }

    fn get_signed<T>(&mut self) -> Result<T>
    where
        T: TryFrom<i64>,
    {
        let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
        match value.integer_value() {
            Some(i) => T::try_from(i).or(Err(Error::CouldNotConvertNumber(key, value))),
            None => Err(Error::ExpectedInteger(key, value)),
        }
    }

    fn get_f64(&mut self) -> Result<f64> {
        let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
        if let Some(ValueType::DoubleValue(value)) = value.value_type {
            Ok(value)
        } else {
            Err(Error::ExpectedDouble(key, value))
        }
    }

    fn get_f32(&mut self) -> Result<f32> {
        let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
        if let Some(ValueType::DoubleValue(f)) = value.value_type {
            if !f.is_finite() || (f32::MIN as f64..=f32::MAX as f64).contains(&f) {
                Ok(f as f32)
            } else {
                Err(Error::CouldNotConvertNumber(key, value))
            }
        } else {
            Err(Error::ExpectedDouble(key, value))
        }
    }

    fn get_bytes(&mut self) -> Result<Vec<u8>> {
        let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
        match value.value_type {
            Some(ValueType::BytesValue(bytes)) => Ok(bytes),
            _ => Err(Error::ExpectedBytes(key, value)),
        }
    }
}

impl<'de, 'a> de::Deserializer<'de> for &'a mut Deserializer {
    type Error = Error;

    /// Self-describing input: the populated variant picks the visitor method.
    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let type_name = match self.peek()? {
            PeekedBundleElement::Key => return self.deserialize_str(visitor),
            PeekedBundleElement::EndOfBundle => return Err(Error::Eof),
            PeekedBundleElement::Value(value) => value.type_name(),
        };
        match type_name {
            "booleanValue" => self.deserialize_bool(visitor),
            "integerValue" => self.deserialize_i64(visitor),
            "doubleValue" => self.deserialize_f64(visitor),
            "stringValue" | "referenceValue" => self.deserialize_string(visitor),
            "bytesValue" => self.deserialize_byte_buf(visitor),
            "arrayValue" => self.deserialize_seq(visitor),
            "mapValue" | "geoPointValue" | "timestampValue" => self.deserialize_map(visitor),
            _ => self.deserialize_unit(visitor),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_bool(self.get_bool()?)
    }

    fn deserialize_i8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i8(self.get_signed()?)
    }

    fn deserialize_i16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i16(self.get_signed()?)
    }

    fn deserialize_i32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i32(self.get_signed()?)
    }

    fn deserialize_i64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_i64(self.get_signed()?)
    }

    fn deserialize_u8<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u8(self.get_unsigned()?)
    }

    fn deserialize_u16<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u16(self.get_unsigned()?)
    }

    fn deserialize_u32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u32(self.get_unsigned()?)
    }

    fn deserialize_u64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_u64(self.get_unsigned()?)
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_f32(self.get_f32()?)
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_f64(self.get_f64()?)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_string(self.get_string()?)
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_byte_buf(self.get_bytes()?)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_bytes(visitor)
    }

    /// Null and unset values are `None`.
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let is_some = match self.peek()? {
            PeekedBundleElement::Value(value) => value
                .value_type
                .as_ref()
                .map_or(false, |value_type| value_type.is_some_value()),
            _ => true,
        };
        if is_some {
            visitor.visit_some(self)
        } else {
            self.pop()?;
            visitor.visit_none()
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
        match value.value_type {
            None | Some(ValueType::NullValue(_)) => visitor.visit_unit(),
            _ => Err(Error::ExpectedNull(key, value)),
        }
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
        match value.value_type {
            Some(ValueType::ArrayValue(array)) => {
                self.push_bundle(DeserializerBundle::array(&key, array.values));
                let result = visitor.visit_seq(Entries::new(self))?;
                if let BundleElement::EndOfBundle = self.pop()? {
                    Ok(result)
                } else {
                    Err(Error::ExpectedArrayEnd(key))
                }
            }
            _ => Err(Error::ExpectedArray(key, value)),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
        if !value.has_map_value() {
            return Err(Error::ExpectedMap(key, value));
        }
        let map = value.map_value().unwrap_or_default();
        self.push_bundle(DeserializerBundle::map(&key, map));
        let result = visitor.visit_map(Entries::new(self))?;
        self.skip_rest_of_bundle()?;
        Ok(result)
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        let kind = match self.peek()? {
            PeekedBundleElement::Value(value) => match value.value_type {
                Some(ValueType::StringValue(_)) => EnumKind::Unit,
                Some(ValueType::MapValue(_)) => EnumKind::Map,
                _ => EnumKind::Invalid,
            },
            PeekedBundleElement::Key => EnumKind::Unit,
            PeekedBundleElement::EndOfBundle => return Err(Error::Eof),
        };
        match kind {
            EnumKind::Unit => {
                let name = self.pop_variant_name()?;
                visitor.visit_enum(Enum::name_only(self, name))
            }
            EnumKind::Map => {
                let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
                let map = value.clone().map_value().unwrap_or_default();
                self.push_bundle(DeserializerBundle::map(&key, map));
                let result = visitor.visit_enum(Enum::new(self))?;
                if let BundleElement::EndOfBundle = self.pop()? {
                    Ok(result)
                } else {
                    Err(Error::ExpectedEnum(key, value))
                }
            }
            EnumKind::Invalid => {
                let KeyValueSet(key, value) = self.pop()?.key_value_set()?;
                Err(Error::ExpectedEnum(key, value))
            }
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        self.pop()?;
        visitor.visit_unit()
    }
}

enum EnumKind {
    Unit,
    Map,
    Invalid,
}

impl Deserializer {
    /// Drops entries a map visitor left unread and leaves the bundle.
    fn skip_rest_of_bundle(&mut self) -> Result<()> {
        loop {
            if let BundleElement::EndOfBundle = self.pop()? {
                return Ok(());
            }
        }
    }

    /// Pops a variant stored as a bare name, either a string value or a map key.
    fn pop_variant_name(&mut self) -> Result<(String, KeyValueSet)> {
        match self.pop()? {
            BundleElement::Key(name) => {
                let key = match self.processing_bundle {
                    DeserializerBundle::Map(ref bundle) => bundle.key.child(&name),
                    DeserializerBundle::Array(ref bundle) => bundle.key.element(),
                };
                let value = Value::string(name.clone());
                Ok((name, KeyValueSet(key, value)))
            }
            BundleElement::Value(KeyValueSet(key, value)) => {
                let name = match value.value_type {
                    Some(ValueType::StringValue(ref name)) => Some(name.clone()),
                    _ => None,
                };
                match name {
                    Some(name) => Ok((name, KeyValueSet(key, value))),
                    None => Err(Error::ExpectedEnum(key, value)),
                }
            }
            BundleElement::EndOfBundle => Err(Error::Eof),
        }
    }
}

struct Entries<'a> {
    de: &'a mut Deserializer,
}

impl<'a> Entries<'a> {
    fn new(de: &'a mut Deserializer) -> Self {
        Entries { de }
    }
}

impl<'a, 'de> SeqAccess<'de> for Entries<'a> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: DeserializeSeed<'de>,
    {
        if let PeekedBundleElement::EndOfBundle = self.de.peek()? {
            Ok(None)
        } else {
            Ok(Some(seed.deserialize(&mut *self.de)?))
        }
    }
}

impl<'a, 'de> MapAccess<'de> for Entries<'a> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: DeserializeSeed<'de>,
    {
        if let PeekedBundleElement::EndOfBundle = self.de.peek()? {
            Ok(None)
        } else {
            Ok(Some(seed.deserialize(&mut *self.de)?))
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: DeserializeSeed<'de>,
    {
        seed.deserialize(&mut *self.de)
    }
}

struct Enum<'a> {
    de: &'a mut Deserializer,
    /// A bare name can only select a unit variant.
    name_only: Option<(String, KeyValueSet)>,
}

impl<'a> Enum<'a> {
    fn new(de: &'a mut Deserializer) -> Self {
        Enum {
            de,
            name_only: None,
        }
    }

    fn name_only(de: &'a mut Deserializer, name: (String, KeyValueSet)) -> Self {
        Enum {
            de,
            name_only: Some(name),
        }
    }

    fn reject_payload(self) -> Result<&'a mut Deserializer> {
        match self.name_only {
            Some((_, KeyValueSet(key, value))) => Err(Error::ExpectedEnum(key, value)),
            None => Ok(self.de),
        }
    }
}

impl<'de, 'a> EnumAccess<'de> for Enum<'a> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: DeserializeSeed<'de>,
    {
        let variant = match self.name_only {
            Some((ref name, _)) => {
                let name: StringDeserializer<Error> = name.clone().into_deserializer();
                seed.deserialize(name)?
            }
            None => seed.deserialize(&mut *self.de)?,
        };
        Ok((variant, self))
    }
}

impl<'de, 'a> VariantAccess<'de> for Enum<'a> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        Ok(())
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: DeserializeSeed<'de>,
    {
        seed.deserialize(self.reject_payload()?)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(self.reject_payload()?, visitor)
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_map(self.reject_payload()?, visitor)
    }
}
