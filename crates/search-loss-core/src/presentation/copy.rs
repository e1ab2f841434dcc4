use serde::{Deserialize, Serialize};

use crate::estimator::Field;
use crate::formatting::{Locale, PeriodMode};

/// Every static string the form shows, for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStrings {
    pub title: &'static str,
    pub intro: &'static str,
    pub monthly_visitors: &'static str,
    pub search_usage: &'static str,
    pub unsuccessful_search_rate: &'static str,
    pub conversion_rate: &'static str,
    pub avg_order_value: &'static str,
    pub avg_additional_item_value: &'static str,
    pub monthly_visitors_tip: &'static str,
    pub search_usage_tip: &'static str,
    pub unsuccessful_search_rate_tip: &'static str,
    pub avg_order_value_tip: &'static str,
    pub avg_additional_item_value_tip: &'static str,
    pub result_heading: &'static str,
    pub monthly: &'static str,
    pub annual: &'static str,
    pub result_blurb: &'static str,
    pub cta: &'static str,
}

static DOMESTIC: LocaleStrings = LocaleStrings {
    title: "Calcule sua Perda de Receita",
    intro: "Descubra o impacto financeiro de uma busca ineficaz em seu e-commerce. \
            Otimize sua busca e aumente suas vendas.",
    monthly_visitors: "Visitantes Mensais",
    search_usage: "% de Uso da Pesquisa",
    unsuccessful_search_rate: "Taxa de Pesquisa sem Sucesso",
    conversion_rate: "Taxa de Conversão %",
    avg_order_value: "Ticket Médio R$",
    avg_additional_item_value: "Valor de Cada Item Adicional R$",
    monthly_visitors_tip: "Quantos visitantes seu site tem por mês",
    search_usage_tip: "Quantidade de usuários que fazem buscas. Padrão de mercado é 30%",
    unsuccessful_search_rate_tip: "Porcentagem de buscas que resultam em páginas sem resultados",
    avg_order_value_tip: "Valor médio de cada pedido",
    avg_additional_item_value_tip: "Valor médio de um item adicional comprado",
    result_heading: "Sua Perda Total Estimada",
    monthly: "Mensal",
    annual: "Anual",
    result_blurb: "Descubra como nossa IA pode otimizar sua busca e recuperar essa receita perdida.",
    cta: "Vamos Resolver Esse Problema?",
};

static INTERNATIONAL: LocaleStrings = LocaleStrings {
    title: "Calculate Your Revenue Loss",
    intro: "Find out what ineffective search costs your e-commerce store. \
            Optimize your search and grow your sales.",
    monthly_visitors: "Monthly Visitors",
    search_usage: "Search Usage %",
    unsuccessful_search_rate: "Unsuccessful Search Rate",
    conversion_rate: "Conversion Rate %",
    avg_order_value: "Average Order Value $",
    avg_additional_item_value: "Value of Each Additional Item $",
    monthly_visitors_tip: "How many visitors your site gets per month",
    search_usage_tip: "Share of users who search. The market standard is 30%",
    unsuccessful_search_rate_tip: "Share of searches that land on a page with no results",
    avg_order_value_tip: "Average value of each order",
    avg_additional_item_value_tip: "Average value of one additional item purchased",
    result_heading: "Your Estimated Total Loss",
    monthly: "Monthly",
    annual: "Annual",
    result_blurb: "See how our AI can optimize your search and recover this lost revenue.",
    cta: "Shall We Solve This Problem?",
};

impl LocaleStrings {
    /// Resolve the table once per render.
    pub fn for_locale(locale: Locale) -> &'static LocaleStrings {
        match locale {
            Locale::Domestic => &DOMESTIC,
            Locale::International => &INTERNATIONAL,
        }
    }

    pub fn label(&self, field: Field) -> &'static str {
        match field {
            Field::MonthlyVisitors => self.monthly_visitors,
            Field::SearchUsage => self.search_usage,
            Field::UnsuccessfulSearchRate => self.unsuccessful_search_rate,
            Field::ConversionRate => self.conversion_rate,
            Field::AvgOrderValue => self.avg_order_value,
            Field::AvgAdditionalItemValue => self.avg_additional_item_value,
        }
    }

    /// Conversion rate carries no tooltip.
    pub fn tooltip(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::MonthlyVisitors => Some(self.monthly_visitors_tip),
            Field::SearchUsage => Some(self.search_usage_tip),
            Field::UnsuccessfulSearchRate => Some(self.unsuccessful_search_rate_tip),
            Field::ConversionRate => None,
            Field::AvgOrderValue => Some(self.avg_order_value_tip),
            Field::AvgAdditionalItemValue => Some(self.avg_additional_item_value_tip),
        }
    }

    pub fn period(&self, period: PeriodMode) -> &'static str {
        match period {
            PeriodMode::Monthly => self.monthly,
            PeriodMode::Annual => self.annual,
        }
    }
}

/// Scheduling-page link behind the call to action, one per locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaUrls {
    pub domestic: String,
    pub international: String,
}

impl Default for CtaUrls {
    fn default() -> Self {
        Self {
            domestic: "https://retailrocket.pipedrive.com/scheduler/7pv3tO/meeting".into(),
            international: "https://retailrocket.pipedrive.com/scheduler/7pv3tO/meeting?lang=en"
                .into(),
        }
    }
}

impl CtaUrls {
    pub fn for_locale(&self, locale: Locale) -> &str {
        match locale {
            Locale::Domestic => &self.domestic,
            Locale::International => &self.international,
        }
    }
}
